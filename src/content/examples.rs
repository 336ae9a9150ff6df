// src/content/examples.rs
// Built-in example records. Every snippet quotes the external AgentSea
// library; nothing here is executed, only displayed.

use crate::catalog::{Difficulty, ExampleRecord};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn record(
    icon: &str,
    title: &str,
    description: &str,
    tags: &[&str],
    code: &str,
    use_cases: &[&str],
    category: &str,
    difficulty: Difficulty,
) -> ExampleRecord {
    ExampleRecord {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        tags: strings(tags),
        code: code.trim_matches('\n').to_string(),
        use_cases: strings(use_cases),
        category: category.to_string(),
        difficulty,
    }
}

/// The full built-in catalog, in display order.
pub fn builtin_catalog() -> Vec<ExampleRecord> {
    vec![
        first_agent(),
        structured_output(),
        multi_agent_workflow(),
        persistent_memory(),
        mcp_registry(),
        voice_agent(),
        approval_gate(),
    ]
}

fn first_agent() -> ExampleRecord {
    record(
        "🤖",
        "Your first agent",
        "Build and run a tool-using agent in a dozen lines.",
        &["agents", "tools", "getting-started"],
        r#"
use agentsea::{Agent, tools::WebSearch};

#[tokio::main]
async fn main() -> agentsea::Result<()> {
    let agent = Agent::builder("research-assistant")
        .model("sea-large")
        .instructions("Answer concisely and cite your sources.")
        .tool(WebSearch::default())
        .build()?;

    let reply = agent.run("What changed in WebGPU this year?").await?;
    println!("{}", reply.text());
    Ok(())
}
"#,
        &[
            "Research assistants that cite their sources",
            "Support bots grounded in live search",
            "Internal Q&A tools over public docs",
        ],
        "Agents",
        Difficulty::Beginner,
    )
}

fn structured_output() -> ExampleRecord {
    record(
        "📐",
        "Structured output",
        "Parse agent replies straight into your own types.",
        &["agents", "serde", "typed"],
        r#"
use agentsea::Agent;
use serde::Deserialize;

#[derive(Deserialize, agentsea::Schema)]
struct Triage {
    severity: u8,
    component: String,
    summary: String,
}

let agent = Agent::builder("triage")
    .model("sea-small")
    .instructions("Classify incoming bug reports.")
    .build()?;

let triage: Triage = agent
    .run("Checkout spins forever after applying a coupon")
    .await?
    .parsed()?;

assert!(triage.severity <= 5);
"#,
        &[
            "Bug and ticket triage pipelines",
            "Extracting fields from free-form email",
            "Feeding agent output into typed downstream systems",
        ],
        "Agents",
        Difficulty::Intermediate,
    )
}

fn multi_agent_workflow() -> ExampleRecord {
    record(
        "🔀",
        "Multi-agent workflows",
        "Chain specialized agents into one pipeline with retries.",
        &["workflows", "multi-agent", "orchestration"],
        r#"
use agentsea::workflow::{Step, Workflow};

let researcher = Agent::builder("researcher")
    .model("sea-large")
    .instructions("Gather facts. No prose.")
    .build()?;

let writer = Agent::builder("writer")
    .model("sea-small")
    .instructions("Turn bullet points into a briefing.")
    .build()?;

let workflow = Workflow::builder("daily-briefing")
    .step(Step::agent(researcher))
    .step(Step::agent(writer))
    .on_failure(|err, ctx| ctx.retry_with_note(err))
    .build()?;

let briefing = workflow.run("AI policy news for today").await?;
"#,
        &[
            "Research-then-write content pipelines",
            "Splitting one task across cheap and capable models",
            "Recoverable long-running jobs",
        ],
        "Workflows",
        Difficulty::Intermediate,
    )
}

fn persistent_memory() -> ExampleRecord {
    record(
        "🧠",
        "Persistent memory",
        "Give an agent recall that survives the process.",
        &["memory", "sqlite", "recall"],
        r#"
use agentsea::memory::{MemoryStore, Recall};

let memory = MemoryStore::sqlite("support.db").await?;

let agent = Agent::builder("support")
    .model("sea-large")
    .memory(memory)
    .recall(Recall::semantic().top_k(8))
    .build()?;

agent.run("The customer prefers async email follow-ups.").await?;

// A later session recalls what earlier ones learned.
let reply = agent
    .run("How should we follow up with this customer?")
    .await?;
"#,
        &[
            "Support agents that remember customer preferences",
            "Long-lived project copilots",
            "Personalized onboarding flows",
        ],
        "Memory",
        Difficulty::Intermediate,
    )
}

fn mcp_registry() -> ExampleRecord {
    record(
        "🧰",
        "MCP tool registry",
        "Attach MCP servers and allow-list the tools agents may call.",
        &["mcp", "tools", "registry"],
        r#"
use agentsea::mcp::{McpRegistry, ServerSpec};

let registry = McpRegistry::builder()
    .server(ServerSpec::stdio("filesystem", "mcp-server-fs"))
    .server(ServerSpec::http("tickets", "https://mcp.internal/tickets"))
    .allow(["read_file", "search_tickets"])
    .build()
    .await?;

let agent = Agent::builder("ops")
    .model("sea-large")
    .tools(registry.tools())
    .build()?;

let reply = agent.run("Find open tickets about login failures").await?;
"#,
        &[
            "Wiring agents into existing MCP deployments",
            "Central allow-listing of dangerous tools",
            "Mixing stdio and HTTP tool servers",
        ],
        "Tools",
        Difficulty::Advanced,
    )
}

fn voice_agent() -> ExampleRecord {
    record(
        "🎙️",
        "Voice agents",
        "Stream a realtime voice session through any provider.",
        &["voice", "realtime", "streaming"],
        r#"
use agentsea::voice::{VoiceAgent, VoiceEvent, VoiceProvider};

let provider = VoiceProvider::realtime()
    .voice("harbor")
    .sample_rate(24_000);

let mut session = VoiceAgent::builder("front-desk")
    .model("sea-voice")
    .provider(provider)
    .instructions("Greet callers and route them.")
    .connect()
    .await?;

while let Some(event) = session.next_event().await {
    match event {
        VoiceEvent::Transcript(text) => println!("caller: {text}"),
        VoiceEvent::AudioOut(frame) => speaker.play(frame)?,
        _ => {}
    }
}
"#,
        &[
            "Phone front desks and call routing",
            "Hands-free field assistants",
            "Voice interfaces over existing agents",
        ],
        "Voice",
        Difficulty::Advanced,
    )
}

fn approval_gate() -> ExampleRecord {
    record(
        "✋",
        "Human-in-the-loop approvals",
        "Gate risky workflow steps behind a human decision.",
        &["workflows", "approvals", "safety"],
        r#"
use agentsea::workflow::{Approval, Step, Workflow};

let workflow = Workflow::builder("refund-agent")
    .step(Step::agent(refund_agent))
    .gate(
        Approval::required()
            .when(|plan| plan.amount_usd > 200.0)
            .notify("approvals-channel"),
    )
    .step(Step::tool("issue_refund"))
    .build()?;

let outcome = workflow.run("Refund order 88412").await?;
"#,
        &[
            "Refunds and other money-moving actions",
            "Production changes proposed by agents",
            "Compliance reviews inside automated pipelines",
        ],
        "Workflows",
        Difficulty::Advanced,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::categories;

    #[test]
    fn test_builtin_catalog_is_populated() {
        let records = builtin_catalog();
        assert!(records.len() >= 5);
        for record in &records {
            assert!(!record.title.is_empty());
            assert!(!record.description.is_empty());
            assert!(!record.code.is_empty());
            assert!(!record.tags.is_empty());
            assert!(!record.use_cases.is_empty());
        }
    }

    #[test]
    fn test_snippets_have_no_surrounding_blank_lines() {
        for record in builtin_catalog() {
            assert!(!record.code.starts_with('\n'), "{}", record.title);
            assert!(!record.code.ends_with('\n'), "{}", record.title);
        }
    }

    #[test]
    fn test_categories_cover_the_advertised_surface() {
        let records = builtin_catalog();
        let cats = categories(&records);
        for expected in ["Agents", "Workflows", "Memory", "Tools", "Voice"] {
            assert!(cats.contains(&expected), "missing category {expected}");
        }
    }
}
