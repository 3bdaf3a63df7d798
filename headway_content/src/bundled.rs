// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bundled presentation: "Mapping the Journey".
//!
//! Seven sections laid out as metro lines. A shared trunk (introduction,
//! understanding, mapping) forks into the non-technical and technical levels
//! tracks, a projects spur hangs off the first technical stop, and every
//! path converges at the closing line.

use alloc::vec;
use alloc::vec::Vec;

use crate::deck::Deck;
use crate::topology::{SectionLink, Topology};
use crate::types::{Landmark, Resource, ResourceKind, Section, Slide, SlideKind, Track};

/// Builds the bundled deck.
///
/// Slide ids are stable (`slide-01` through `slide-30`) so persisted node
/// positions survive content edits that do not reorder slides.
pub fn bundled_deck() -> Deck {
    Deck::new(sections(), slides(), resources(), landmarks())
}

/// Builds the topology matching [`bundled_deck`].
///
/// The technical track is the primary path into the closing section; the
/// non-technical terminus and the projects spur merge in without supplying
/// the way back. The non-technical terminus also carries a scenic drop onto
/// the technical line, which is drawn but never navigated.
pub fn bundled_topology() -> Topology {
    Topology::new(vec![
        SectionLink::main("intro", "understanding"),
        SectionLink::main("understanding", "mapping"),
        SectionLink::main("mapping", "levels-nontech"),
        SectionLink::branch("mapping", "levels-tech"),
        SectionLink::merge("levels-nontech", "closing", false),
        SectionLink::merge("levels-tech", "closing", true),
        SectionLink::branch("levels-tech", "projects")
            .from_first()
            .dropping(),
        SectionLink::merge("projects", "closing", false),
        SectionLink::scenic("levels-nontech", "levels-tech").dropping(),
    ])
}

fn sections() -> Vec<Section> {
    vec![
        Section::new("intro", "The Widening Gulf", Track::General),
        Section::new("understanding", "Understanding AI", Track::NonTechnical),
        Section::new("mapping", "Mapping the Journey", Track::General),
        Section::new(
            "levels-nontech",
            "The Non-Technical Track",
            Track::NonTechnical,
        ),
        Section::new("levels-tech", "The Technical Track", Track::Technical),
        Section::new("projects", "Projects", Track::Technical),
        Section::new("closing", "Closing", Track::General),
    ]
}

fn slides() -> Vec<Slide> {
    vec![
        // The Widening Gulf
        Slide::new(
            "slide-01",
            "intro",
            SlideKind::Title,
            "Technology and the Widening Gulf",
        )
        .with_subtitle("The growing divide between tech-literate and non-tech-literate")
        .with_bullets([
            "Technology makes us more efficient: bicycle, typewriter, Google",
            "AI is creating a much larger gulf than previous tech",
            "Think about it from a mental model perspective first",
        ]),
        Slide::new(
            "slide-02",
            "intro",
            SlideKind::Content,
            "Mental Models Through Use",
        )
        .with_subtitle("Understanding comes from doing, not reading")
        .with_bullets([
            "First tried: \"Please give me directions to the nearest ice cream store...\"",
            "Learned: \"Molly Moon directions\"",
            "This understanding comes through use, not instruction",
        ]),
        // Understanding AI
        Slide::new(
            "slide-03",
            "understanding",
            SlideKind::Content,
            "New Tech, Old Mental Models",
        )
        .with_subtitle("The temptation to treat AI like enhanced Google")
        .with_bullets([
            "First instinct: ChatGPT is a better Google",
            "Use it like a knowledgeable friend",
            "Back and forth conversation",
            "But it's inconsistent: sometimes brilliant, sometimes wrong",
        ]),
        Slide::new(
            "slide-04",
            "understanding",
            SlideKind::Content,
            "From Confidant to Digital Employee",
        )
        .with_subtitle("The major mental leap")
        .with_bullets([
            "AI is not just an all-knowing friend",
            "Think of it as a digital employee",
            "Shift from getting advice to actual execution",
            "You become a director/orchestrator",
            "You can have as many as you can handle",
        ]),
        // Mapping the Journey
        Slide::new(
            "slide-05",
            "mapping",
            SlideKind::Content,
            "Mapping the Journey",
        )
        .with_subtitle("A progressive approach to understanding AI")
        .with_bullets([
            "Overwhelming amount of information out there",
            "Skipping steps makes nothing feel coherent",
            "Confusion is a sequencing problem, not an identity problem",
            "We now have the greatest learning tool ever",
        ]),
        Slide::new("slide-06", "mapping", SlideKind::Content, "The Wrong Split")
            .with_subtitle("Technical vs Non-Technical is a cultural issue")
            .with_bullets([
                "The floor of what you can do without code is now incredibly high",
                "Lines are blurring",
                "The real question: How much resistance to change do you feel?",
                "This is the real gulf",
            ]),
        // The Non-Technical Track, levels 0 through 8
        Slide::new("slide-07", "levels-nontech", SlideKind::Quote, "Avoidance")
            .with_level(0)
            .with_quote("\"This won't affect my job.\"")
            .with_bullets([
                "Historical echoes of famous people dismissing transformative technology",
            ]),
        Slide::new(
            "slide-08",
            "levels-nontech",
            SlideKind::Content,
            "AI as Uber Google",
        )
        .with_level(1)
        .with_bullets([
            "Questions and answers",
            "Summaries and explanations",
            "Brainstorming",
            "Prompt engineering basics",
            "This is where most daily ChatGPT users start",
        ]),
        Slide::new(
            "slide-09",
            "levels-nontech",
            SlideKind::Content,
            "AI as Thought Partner",
        )
        .with_level(2)
        .with_bullets([
            "Giving AI more context: PDFs, docs, images",
            "Back and forth dialogue on complex topics",
            "Trying different models: ChatGPT, Gemini, Claude",
            "Each has strengths and weaknesses",
        ]),
        Slide::new(
            "slide-10",
            "levels-nontech",
            SlideKind::Content,
            "Context Engineering",
        )
        .with_level(3)
        .with_bullets([
            "Understanding how context helps or hurts",
            "Longer chat = more memory used = degraded performance",
            "Structured input (Markdown) yields better results",
            "Using Projects to keep context clean",
            "Choosing the right model for the task",
            "Results start feeling reliable",
        ]),
        Slide::new(
            "slide-11",
            "levels-nontech",
            SlideKind::Content,
            "Tools in Your Workflow",
        )
        .with_level(4)
        .with_bullets([
            "Wispr Flow - voice dictation",
            "Granola - automatic meeting notes",
            "Obsidian - AI-accessible notes in Markdown",
            "Figma, Canva, Notion, Slack with AI features",
            "Making your data accessible and usable by AI",
        ]),
        Slide::new(
            "slide-12",
            "levels-nontech",
            SlideKind::Content,
            "AI-Enabled Browsing",
        )
        .with_level(5)
        .with_bullets([
            "Google Gemini built into Chrome",
            "ChatGPT Operator (Atlas) browser",
            "Claude extension - takes actions in browser",
            "Be mindful of security with sensitive sites",
        ]),
        Slide::new(
            "slide-13",
            "levels-nontech",
            SlideKind::Content,
            "Media & Creative Production",
        )
        .with_level(6)
        .with_bullets([
            "Image generation: Nano Banana, Midjourney",
            "Video production: Veo, O3",
            "The skill: Can you get it to give you what you want?",
        ]),
        Slide::new(
            "slide-14",
            "levels-nontech",
            SlideKind::Content,
            "Automation Tools",
        )
        .with_level(7)
        .with_bullets([
            "Zapier - most common automation tool",
            "N8n - bridge to complex automations",
            "Gumloop - built with AI in mind",
            "Visual interfaces to doing things with code - without looking at code",
        ]),
        Slide::new(
            "slide-15",
            "levels-nontech",
            SlideKind::Content,
            "Natural Language Software",
        )
        .with_level(8)
        .with_bullets([
            "Lovable, Bolt AI, Google AI Studio",
            "Create software without knowing code syntax",
            "Currently best for front-end / visual things",
            "Great playground to get comfortable",
            "Understanding the limits is part of the learning",
        ]),
        // The Technical Track, levels 1 through 9
        Slide::new(
            "slide-16",
            "levels-tech",
            SlideKind::Content,
            "The Command Line",
        )
        .with_level(1)
        .with_bullets([
            "The terminal stops being scary when AI sits next to you",
            "Ask for the command, read it, then run it",
            "Small errands first: renaming files, converting formats",
            "This is the boarding platform for everything below",
        ]),
        Slide::new(
            "slide-17",
            "levels-tech",
            SlideKind::Content,
            "Version Control",
        )
        .with_level(2)
        .with_bullets([
            "Git as a save system for everything you make",
            "Commit early, branch freely, undo fearlessly",
            "GitHub as backup, portfolio, and collaboration space",
        ]),
        Slide::new(
            "slide-18",
            "levels-tech",
            SlideKind::Content,
            "Scripting Everyday Tasks",
        )
        .with_level(3)
        .with_bullets([
            "Python and shell scripts written with AI, read by you",
            "Automate the boring parts of your actual job",
            "You maintain the intent, AI maintains the syntax",
        ]),
        Slide::new(
            "slide-19",
            "levels-tech",
            SlideKind::Content,
            "AI-Powered IDEs",
        )
        .with_level(4)
        .with_bullets([
            "Cursor, Windsurf, VS Code with Copilot",
            "Tab-completion grows into whole-file edits",
            "Reading diffs becomes the core skill",
        ]),
        Slide::new(
            "slide-20",
            "levels-tech",
            SlideKind::Content,
            "Coding Agents",
        )
        .with_level(5)
        .with_bullets([
            "Claude Code, Codex, Aider - agents that live in the terminal",
            "Describe the outcome, review the plan, supervise the run",
            "The digital employee from the intro, now hands-on",
        ]),
        Slide::new(
            "slide-21",
            "levels-tech",
            SlideKind::Content,
            "Connecting Your Tools",
        )
        .with_level(6)
        .with_bullets([
            "Model Context Protocol: one plug for your data sources",
            "Agents that can see your notes, calendar, and codebase",
            "Capability compounds when tools talk to each other",
        ]),
        Slide::new(
            "slide-22",
            "levels-tech",
            SlideKind::Content,
            "APIs and Pipelines",
        )
        .with_level(7)
        .with_bullets([
            "Calling models from your own code",
            "Batch jobs, scheduled runs, event-driven flows",
            "Where automation tools hand off to real software",
        ]),
        Slide::new(
            "slide-23",
            "levels-tech",
            SlideKind::Content,
            "Multi-Agent Systems",
        )
        .with_level(8)
        .with_bullets([
            "Orchestrating several agents on one goal",
            "Planner, builder, reviewer - roles instead of prompts",
            "Failure modes multiply too: supervision still matters",
        ]),
        Slide::new(
            "slide-24",
            "levels-tech",
            SlideKind::Content,
            "Production AI Software",
        )
        .with_level(9)
        .with_bullets([
            "Evals, guardrails, monitoring",
            "Shipping something other people rely on",
            "The craft is the same; the materials changed",
        ]),
        Slide::new(
            "slide-25",
            "levels-tech",
            SlideKind::Content,
            "Where the Tracks Meet",
        )
        .with_bullets([
            "Both tracks climb toward the same place",
            "Non-technical riders arrive with judgment and taste",
            "Technical riders arrive with leverage and tooling",
            "The gulf closes from both sides",
        ]),
        // Projects
        Slide::new("slide-26", "projects", SlideKind::Content, "Doomtown")
            .with_subtitle("A browser game nobody typed the code for")
            .with_bullets([
                "Built level by level through conversation",
                "Every sprite, sound, and bug fix described in English",
                "Shipped in a weekend; played by strangers on Monday",
            ]),
        Slide::new(
            "slide-27",
            "projects",
            SlideKind::Content,
            "The Slop Factory",
        )
        .with_subtitle("An automation pipeline that makes too much content")
        .with_bullets([
            "Scheduled agents drafting, illustrating, and publishing",
            "A cautionary tale about volume without taste",
            "The lesson: automation amplifies whatever you feed it",
        ]),
        Slide::new(
            "slide-28",
            "projects",
            SlideKind::Content,
            "A Personal Dashboard",
        )
        .with_subtitle("Small software for an audience of one")
        .with_bullets([
            "Pulls your calendar, notes, and weather into one page",
            "Exactly the features you want, none you don't",
            "The kind of software that never used to be worth writing",
        ]),
        // Closing
        Slide::new(
            "slide-29",
            "closing",
            SlideKind::Content,
            "Choosing Your Port of Entry",
        )
        .with_subtitle("No fear, curiosity, or necessity - any port works")
        .with_bullets([
            "Start at the level that matches your resistance, not your resume",
            "Climb one level at a time; skipping breeds confusion",
            "The map is the same for everyone; the journey is yours",
        ]),
        Slide::new(
            "slide-30",
            "closing",
            SlideKind::Quote,
            "The Journey Is the Point",
        )
        .with_quote(
            "\"The best time to board was two years ago. The second best time is today.\"",
        ),
    ]
}

fn resources() -> Vec<Resource> {
    vec![
        Resource::new(
            "res-wispr",
            "slide-11",
            ResourceKind::Tool,
            "Wispr Flow",
            "https://wisprflow.ai",
        )
        .with_description("Voice dictation that keeps up with you")
        .featured(),
        Resource::new(
            "res-granola",
            "slide-11",
            ResourceKind::Tool,
            "Granola",
            "https://granola.ai",
        )
        .with_description("Automatic meeting notes")
        .featured(),
        Resource::new(
            "res-obsidian",
            "slide-11",
            ResourceKind::Tool,
            "Obsidian",
            "https://obsidian.md",
        )
        .with_description("Markdown notes AI can read")
        .featured(),
        Resource::new(
            "res-context-reset",
            "slide-10",
            ResourceKind::Prompt,
            "Context reset prompt",
            "https://gist.github.com/headway/context-reset",
        )
        .with_prompt(
            "Summarize everything we have established so far in under 200 words, \
             then continue from that summary as if the earlier conversation were gone.",
        ),
        Resource::new(
            "res-zapier",
            "slide-14",
            ResourceKind::Tool,
            "Zapier",
            "https://zapier.com",
        )
        .featured(),
        Resource::new(
            "res-n8n",
            "slide-14",
            ResourceKind::Tool,
            "n8n",
            "https://n8n.io",
        )
        .with_description("Self-hostable automation with an escape hatch to code")
        .featured(),
        Resource::new(
            "res-lovable",
            "slide-15",
            ResourceKind::Tool,
            "Lovable",
            "https://lovable.dev",
        )
        .featured(),
        Resource::new(
            "res-git-handbook",
            "slide-17",
            ResourceKind::Article,
            "Git Handbook",
            "https://guides.github.com/introduction/git-handbook/",
        ),
        Resource::new(
            "res-claude-code",
            "slide-20",
            ResourceKind::Docs,
            "Claude Code documentation",
            "https://docs.anthropic.com/en/docs/claude-code",
        ),
        Resource::new(
            "res-mcp",
            "slide-21",
            ResourceKind::Docs,
            "Model Context Protocol",
            "https://modelcontextprotocol.io",
        )
        .featured(),
        Resource::new(
            "res-doomtown",
            "slide-26",
            ResourceKind::Github,
            "Doomtown source",
            "https://github.com/headway-demos/doomtown",
        ),
    ]
}

fn landmarks() -> Vec<Landmark> {
    vec![
        Landmark::new("landmark-doomtown", "AI Takeover Doomtown")
            .with_image("/assets/images/landmarks/doomtown.png"),
        Landmark::new("landmark-slop-factory", "AI Slop Factory")
            .with_image("/assets/images/landmarks/slop-factory.png"),
        Landmark::new("landmark-empowerment", "City of AI Empowerment")
            .with_image("/assets/images/landmarks/empowerment-city.png"),
        Landmark::new("landmark-port-no-fear", "Port of No Fear")
            .with_image("/assets/images/landmarks/port-no-fear.png")
            .with_scale(0.6),
        Landmark::new("landmark-port-curiosity", "Port of Curiosity")
            .with_image("/assets/images/landmarks/port-curiosity.png")
            .with_scale(0.6),
        Landmark::new("landmark-port-necessity", "Port of Necessity")
            .with_image("/assets/images/landmarks/port-necessity.png")
            .with_scale(0.6),
    ]
}
