// src/content/home.rs
// Landing copy. Static text only; the `home` command renders it.

/// Product name as shown in the hero block.
pub const HERO_TITLE: &str = "AgentSea";

pub const HERO_TAGLINE: &str = "Production agentic AI for Rust teams.";

pub const HERO_PITCH: &str = "\
Ship agents, workflows, and voice sessions with one library. AgentSea gives \
you typed building blocks for the messy parts: tool calling, memory, MCP \
integration, and human approval gates.";

/// One feature highlight on the landing view.
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🤖",
        title: "Agents",
        blurb: "Builder-style agents with tools, instructions, and typed replies.",
    },
    Feature {
        icon: "🔀",
        title: "Workflows",
        blurb: "Chain agents into pipelines with retries and failure hooks.",
    },
    Feature {
        icon: "🧠",
        title: "Memory",
        blurb: "Semantic recall backed by stores you already run.",
    },
    Feature {
        icon: "🧰",
        title: "MCP",
        blurb: "Attach MCP servers and allow-list exactly the tools you trust.",
    },
    Feature {
        icon: "🎙️",
        title: "Voice",
        blurb: "Realtime voice sessions through pluggable providers.",
    },
    Feature {
        icon: "✋",
        title: "Approvals",
        blurb: "Human-in-the-loop gates for the steps that need a person.",
    },
];

pub const GETTING_STARTED: &str = "cargo add agentsea";
