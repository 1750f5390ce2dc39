//! Built-in model and engine tables.

use lazy_static::lazy_static;

use super::{
    CostTier, DeploymentType, EngineRecord, ModelRecord, QualityTier, SpeedTier, TokenCost,
};

fn tags(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

lazy_static! {
    // Engines appear in the order they are listed to users.
    pub(crate) static ref BUILTIN_ENGINES: Vec<EngineRecord> = vec![
        EngineRecord {
            id: "claude".to_string(),
            name: "Claude CLI".to_string(),
            description: "Anthropic's Claude via CLI tool".to_string(),
            deployment: DeploymentType::Cloud,
            requires_auth: true,
            supports_streaming: true,
            default_model: Some("claude-sonnet-4-20250514".to_string()),
            aliases: tags(&["claude-code"]),
        },
        EngineRecord {
            id: "opencode".to_string(),
            name: "OpenCode".to_string(),
            description: "Multi-provider AI tool (OpenAI, DeepSeek, MiniMax)".to_string(),
            deployment: DeploymentType::Cloud,
            requires_auth: true,
            supports_streaming: true,
            default_model: Some("gpt-4o".to_string()),
            aliases: Vec::new(),
        },
        EngineRecord {
            id: "codex".to_string(),
            name: "Codex CLI".to_string(),
            description: "OpenAI Codex CLI (supports multiple providers)".to_string(),
            deployment: DeploymentType::Cloud,
            requires_auth: true,
            supports_streaming: true,
            default_model: Some("deepseek-v3".to_string()),
            aliases: Vec::new(),
        },
        EngineRecord {
            id: "ollama".to_string(),
            name: "Ollama".to_string(),
            description: "Local inference with open models".to_string(),
            deployment: DeploymentType::Local,
            requires_auth: false,
            supports_streaming: true,
            default_model: Some("qwen2.5-coder:7b".to_string()),
            aliases: Vec::new(),
        },
        EngineRecord {
            id: "aider".to_string(),
            name: "Aider".to_string(),
            description: "AI pair programming assistant".to_string(),
            deployment: DeploymentType::Cloud,
            requires_auth: true,
            supports_streaming: true,
            // Configured through .aider.conf.yml
            default_model: None,
            aliases: Vec::new(),
        },
        EngineRecord {
            id: "qwen".to_string(),
            name: "Qwen-Code CLI".to_string(),
            description: "Qwen AI coding assistant".to_string(),
            deployment: DeploymentType::Cloud,
            requires_auth: true,
            supports_streaming: true,
            default_model: None,
            aliases: Vec::new(),
        },
        EngineRecord {
            id: "cursor".to_string(),
            name: "Cursor Agent".to_string(),
            description: "Cursor AI editor agent".to_string(),
            deployment: DeploymentType::Cloud,
            requires_auth: true,
            supports_streaming: true,
            default_model: None,
            aliases: Vec::new(),
        },
        EngineRecord {
            id: "goose".to_string(),
            name: "Goose CLI".to_string(),
            description: "Block's Goose AI assistant".to_string(),
            deployment: DeploymentType::Cloud,
            requires_auth: true,
            supports_streaming: true,
            default_model: None,
            aliases: Vec::new(),
        },
        EngineRecord {
            id: "copilot".to_string(),
            name: "GitHub Copilot CLI".to_string(),
            description: "GitHub Copilot command-line interface".to_string(),
            deployment: DeploymentType::Cloud,
            requires_auth: true,
            supports_streaming: true,
            default_model: None,
            aliases: Vec::new(),
        },
    ];

    // Grouped by engine. Iteration order is visible in listings and suggestions.
    pub(crate) static ref BUILTIN_MODELS: Vec<ModelRecord> = vec![
        // claude
        ModelRecord {
            id: "claude-sonnet-4-20250514".to_string(),
            engine: "claude".to_string(),
            model: "claude-sonnet-4-20250514".to_string(),
            full_name: "Claude Sonnet 4 (May 2025)".to_string(),
            context_window: Some(200_000),
            default_temperature: Some(0.7),
            cost: CostTier::Medium,
            cost_per_mtok: TokenCost::new(3.0, 15.0),
            free_tier: true,
            speed: SpeedTier::Fast,
            quality: QualityTier::Excellent,
            best_for: tags(&["coding", "analysis", "reasoning", "general"]),
            notes: "Best balance of speed, quality, and cost. Recommended default.".to_string(),
        },
        ModelRecord {
            id: "claude-opus-4-20250514".to_string(),
            engine: "claude".to_string(),
            model: "claude-opus-4-20250514".to_string(),
            full_name: "Claude Opus 4 (May 2025)".to_string(),
            context_window: Some(200_000),
            default_temperature: Some(0.7),
            cost: CostTier::Expensive,
            cost_per_mtok: TokenCost::new(15.0, 75.0),
            free_tier: false,
            speed: SpeedTier::Slow,
            quality: QualityTier::Excellent,
            best_for: tags(&["complex-reasoning", "research", "high-stakes", "difficult-problems"]),
            notes: "Use when quality matters more than cost/speed. 5x more expensive than Sonnet.".to_string(),
        },
        ModelRecord {
            id: "claude-sonnet-3.7".to_string(),
            engine: "claude".to_string(),
            model: "claude-sonnet-3.7".to_string(),
            full_name: "Claude Sonnet 3.7".to_string(),
            context_window: Some(200_000),
            default_temperature: Some(0.7),
            cost: CostTier::Medium,
            cost_per_mtok: TokenCost::new(3.0, 15.0),
            free_tier: true,
            speed: SpeedTier::Fast,
            quality: QualityTier::Excellent,
            best_for: tags(&["coding", "analysis", "reasoning"]),
            notes: "Previous generation Sonnet. Still very capable.".to_string(),
        },
        ModelRecord {
            id: "claude-haiku-3.5".to_string(),
            engine: "claude".to_string(),
            model: "claude-haiku-3.5".to_string(),
            full_name: "Claude Haiku 3.5".to_string(),
            context_window: Some(200_000),
            default_temperature: Some(0.7),
            cost: CostTier::Cheap,
            cost_per_mtok: TokenCost::new(0.8, 4.0),
            free_tier: true,
            speed: SpeedTier::VeryFast,
            quality: QualityTier::Good,
            best_for: tags(&["simple-tasks", "batch-processing", "quick-responses"]),
            notes: "Fastest and cheapest Claude model. Good for simple, straightforward tasks.".to_string(),
        },
        // opencode
        ModelRecord {
            id: "gpt-4o".to_string(),
            engine: "opencode".to_string(),
            model: "gpt-4o".to_string(),
            full_name: "GPT-4o".to_string(),
            context_window: Some(128_000),
            default_temperature: Some(1.0),
            cost: CostTier::Medium,
            cost_per_mtok: TokenCost::new(2.5, 10.0),
            free_tier: false,
            speed: SpeedTier::Fast,
            quality: QualityTier::Excellent,
            best_for: tags(&["coding", "multimodal", "general", "reasoning"]),
            notes: "OpenAI's flagship model. Optimized for speed and cost.".to_string(),
        },
        ModelRecord {
            id: "gpt-4-turbo".to_string(),
            engine: "opencode".to_string(),
            model: "gpt-4-turbo".to_string(),
            full_name: "GPT-4 Turbo".to_string(),
            context_window: Some(128_000),
            default_temperature: Some(1.0),
            cost: CostTier::Medium,
            cost_per_mtok: TokenCost::new(10.0, 30.0),
            free_tier: false,
            speed: SpeedTier::Fast,
            quality: QualityTier::Excellent,
            best_for: tags(&["coding", "analysis", "reasoning"]),
            notes: "Previous generation GPT-4. Still very capable.".to_string(),
        },
        ModelRecord {
            id: "gpt-3.5-turbo".to_string(),
            engine: "opencode".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            full_name: "GPT-3.5 Turbo".to_string(),
            context_window: Some(16_385),
            default_temperature: Some(1.0),
            cost: CostTier::Cheap,
            cost_per_mtok: TokenCost::new(0.5, 1.5),
            free_tier: false,
            speed: SpeedTier::VeryFast,
            quality: QualityTier::Good,
            best_for: tags(&["simple-tasks", "batch-processing", "prototyping"]),
            notes: "Fastest and cheapest OpenAI model. Good for simple tasks.".to_string(),
        },
        ModelRecord {
            id: "o1-preview".to_string(),
            engine: "opencode".to_string(),
            model: "o1-preview".to_string(),
            full_name: "OpenAI o1 Preview".to_string(),
            context_window: Some(128_000),
            default_temperature: Some(1.0),
            cost: CostTier::Expensive,
            cost_per_mtok: TokenCost::new(15.0, 60.0),
            free_tier: false,
            speed: SpeedTier::Slow,
            quality: QualityTier::Excellent,
            best_for: tags(&["complex-reasoning", "math", "science", "research"]),
            notes: "Advanced reasoning model. Uses extended thinking time for hard problems.".to_string(),
        },
        ModelRecord {
            id: "o1".to_string(),
            engine: "opencode".to_string(),
            model: "o1".to_string(),
            full_name: "OpenAI o1".to_string(),
            context_window: Some(200_000),
            default_temperature: Some(1.0),
            cost: CostTier::Expensive,
            cost_per_mtok: TokenCost::new(15.0, 60.0),
            free_tier: false,
            speed: SpeedTier::Slow,
            quality: QualityTier::Excellent,
            best_for: tags(&["complex-reasoning", "production", "high-stakes"]),
            notes: "Production reasoning model with extended context.".to_string(),
        },
        ModelRecord {
            id: "deepseek-chat".to_string(),
            engine: "opencode".to_string(),
            model: "deepseek-chat".to_string(),
            full_name: "DeepSeek V3".to_string(),
            context_window: Some(64_000),
            default_temperature: Some(1.0),
            cost: CostTier::Cheap,
            cost_per_mtok: TokenCost::new(0.14, 0.28),
            free_tier: false,
            speed: SpeedTier::Fast,
            quality: QualityTier::Excellent,
            best_for: tags(&["coding", "reasoning", "cost-efficiency"]),
            notes: "DeepSeek V3. Extremely cost-efficient with excellent coding ability.".to_string(),
        },
        ModelRecord {
            id: "minimax-m2.1".to_string(),
            engine: "opencode".to_string(),
            model: "minimax-m2.1".to_string(),
            full_name: "MiniMax M2.1".to_string(),
            context_window: Some(32_000),
            default_temperature: Some(1.0),
            cost: CostTier::Cheap,
            cost_per_mtok: TokenCost::new(0.1, 0.1),
            free_tier: false,
            speed: SpeedTier::Fast,
            quality: QualityTier::Good,
            best_for: tags(&["general", "cost-efficiency"]),
            notes: "MiniMax's latest model. Very cost-efficient.".to_string(),
        },
        ModelRecord {
            id: "minimax-m2.1-free".to_string(),
            engine: "opencode".to_string(),
            model: "minimax-m2.1-free".to_string(),
            full_name: "MiniMax M2.1 (Free)".to_string(),
            context_window: Some(32_000),
            default_temperature: Some(1.0),
            cost: CostTier::Free,
            cost_per_mtok: TokenCost::FREE,
            free_tier: true,
            speed: SpeedTier::Fast,
            quality: QualityTier::Good,
            best_for: tags(&["general", "cost-efficiency", "prototyping"]),
            notes: "Free tier MiniMax M2.1 via opencode. No API key required.".to_string(),
        },
        ModelRecord {
            id: "big-pickle".to_string(),
            engine: "opencode".to_string(),
            model: "big-pickle".to_string(),
            full_name: "Big Pickle".to_string(),
            context_window: Some(200_000),
            default_temperature: Some(1.0),
            cost: CostTier::Free,
            cost_per_mtok: TokenCost::FREE,
            free_tier: true,
            speed: SpeedTier::Medium,
            quality: QualityTier::Good,
            best_for: tags(&["general", "reasoning", "long-context"]),
            notes: "Free reasoning model via opencode. 200K context window.".to_string(),
        },
        ModelRecord {
            id: "glm-4.7-free".to_string(),
            engine: "opencode".to_string(),
            model: "glm-4.7-free".to_string(),
            full_name: "GLM-4.7 (Free)".to_string(),
            context_window: Some(204_000),
            default_temperature: Some(1.0),
            cost: CostTier::Free,
            cost_per_mtok: TokenCost::FREE,
            free_tier: true,
            speed: SpeedTier::Medium,
            quality: QualityTier::Good,
            best_for: tags(&["general", "long-context", "analysis"]),
            notes: "Free GLM model via opencode. 204K context window for extensive documents.".to_string(),
        },
        ModelRecord {
            id: "gpt-5-nano".to_string(),
            engine: "opencode".to_string(),
            model: "gpt-5-nano".to_string(),
            full_name: "GPT-5 Nano".to_string(),
            context_window: Some(16_000),
            default_temperature: Some(1.0),
            cost: CostTier::Free,
            cost_per_mtok: TokenCost::FREE,
            free_tier: true,
            speed: SpeedTier::VeryFast,
            quality: QualityTier::Fair,
            best_for: tags(&["simple-tasks", "testing", "prototyping"]),
            notes: "Free lightweight model via opencode. Good for simple tasks.".to_string(),
        },
        ModelRecord {
            id: "grok-code".to_string(),
            engine: "opencode".to_string(),
            model: "grok-code".to_string(),
            full_name: "Grok Code".to_string(),
            context_window: Some(32_000),
            default_temperature: Some(1.0),
            cost: CostTier::Free,
            cost_per_mtok: TokenCost::FREE,
            free_tier: true,
            speed: SpeedTier::Fast,
            quality: QualityTier::Good,
            best_for: tags(&["coding", "debugging", "prototyping"]),
            notes: "Free coding-focused model via opencode.".to_string(),
        },
        ModelRecord {
            id: "minimax-m2".to_string(),
            engine: "opencode".to_string(),
            model: "minimax/MiniMax-M2".to_string(),
            full_name: "MiniMax M2 (API)".to_string(),
            context_window: Some(32_000),
            default_temperature: Some(1.0),
            cost: CostTier::Cheap,
            cost_per_mtok: TokenCost::new(0.3, 1.2),
            free_tier: false,
            speed: SpeedTier::Fast,
            quality: QualityTier::Good,
            best_for: tags(&["general", "cost-efficiency"]),
            notes: "MiniMax M2 via private API key. Use --model minimax/MiniMax-M2.".to_string(),
        },
        ModelRecord {
            id: "minimax-m2.1-api".to_string(),
            engine: "opencode".to_string(),
            model: "minimax/MiniMax-M2.1".to_string(),
            full_name: "MiniMax M2.1 (API)".to_string(),
            context_window: Some(32_000),
            default_temperature: Some(1.0),
            cost: CostTier::Cheap,
            cost_per_mtok: TokenCost::new(0.3, 1.2),
            free_tier: false,
            speed: SpeedTier::Fast,
            quality: QualityTier::Good,
            best_for: tags(&["general", "cost-efficiency"]),
            notes: "MiniMax M2.1 via private API key. Use --model minimax/MiniMax-M2.1.".to_string(),
        },
        // codex
        ModelRecord {
            id: "deepseek-v3".to_string(),
            engine: "codex".to_string(),
            model: "deepseek-v3".to_string(),
            full_name: "DeepSeek V3 (via Codex)".to_string(),
            context_window: Some(64_000),
            default_temperature: Some(1.0),
            cost: CostTier::Cheap,
            cost_per_mtok: TokenCost::new(0.14, 0.28),
            free_tier: false,
            speed: SpeedTier::Fast,
            quality: QualityTier::Excellent,
            best_for: tags(&["coding", "reasoning"]),
            notes: "DeepSeek V3 via Codex CLI. Excellent for coding.".to_string(),
        },
        ModelRecord {
            id: "claude-sonnet-4".to_string(),
            engine: "codex".to_string(),
            model: "claude-sonnet-4".to_string(),
            full_name: "Claude Sonnet 4 (via Codex)".to_string(),
            context_window: Some(200_000),
            default_temperature: Some(0.7),
            cost: CostTier::Medium,
            cost_per_mtok: TokenCost::new(3.0, 15.0),
            free_tier: false,
            speed: SpeedTier::Fast,
            quality: QualityTier::Excellent,
            best_for: tags(&["coding", "reasoning"]),
            notes: "Claude Sonnet 4 accessed via Codex CLI.".to_string(),
        },
        // ollama
        ModelRecord {
            id: "qwen2.5-coder:7b".to_string(),
            engine: "ollama".to_string(),
            model: "qwen2.5-coder:7b".to_string(),
            full_name: "Qwen 2.5 Coder 7B".to_string(),
            context_window: Some(32_768),
            default_temperature: Some(0.2),
            cost: CostTier::Free,
            cost_per_mtok: TokenCost::FREE,
            free_tier: true,
            speed: SpeedTier::Medium,
            quality: QualityTier::Good,
            best_for: tags(&["coding", "offline-work", "privacy", "local-dev"]),
            notes: "Free local inference. Excellent for coding. Requires ~6GB RAM.".to_string(),
        },
        ModelRecord {
            id: "qwen2.5-coder:14b".to_string(),
            engine: "ollama".to_string(),
            model: "qwen2.5-coder:14b".to_string(),
            full_name: "Qwen 2.5 Coder 14B".to_string(),
            context_window: Some(32_768),
            default_temperature: Some(0.2),
            cost: CostTier::Free,
            cost_per_mtok: TokenCost::FREE,
            free_tier: true,
            speed: SpeedTier::Medium,
            quality: QualityTier::Good,
            best_for: tags(&["coding", "offline-work", "privacy"]),
            notes: "Larger Qwen model. Better quality than 7B. Requires ~12GB RAM.".to_string(),
        },
        ModelRecord {
            id: "qwen2.5-coder:32b".to_string(),
            engine: "ollama".to_string(),
            model: "qwen2.5-coder:32b".to_string(),
            full_name: "Qwen 2.5 Coder 32B".to_string(),
            context_window: Some(32_768),
            default_temperature: Some(0.2),
            cost: CostTier::Free,
            cost_per_mtok: TokenCost::FREE,
            free_tier: true,
            speed: SpeedTier::Slow,
            quality: QualityTier::Excellent,
            best_for: tags(&["coding", "complex-problems", "local-dev"]),
            notes: "Largest Qwen coder. Best quality. Requires ~24GB RAM.".to_string(),
        },
        ModelRecord {
            id: "deepseek-coder-v2:16b".to_string(),
            engine: "ollama".to_string(),
            model: "deepseek-coder-v2:16b".to_string(),
            full_name: "DeepSeek Coder V2 16B".to_string(),
            context_window: Some(16_384),
            default_temperature: Some(0.2),
            cost: CostTier::Free,
            cost_per_mtok: TokenCost::FREE,
            free_tier: true,
            speed: SpeedTier::Medium,
            quality: QualityTier::Good,
            best_for: tags(&["coding", "local-dev"]),
            notes: "DeepSeek's local coding model. Strong performance. Requires ~12GB RAM.".to_string(),
        },
        ModelRecord {
            id: "codellama:7b".to_string(),
            engine: "ollama".to_string(),
            model: "codellama:7b".to_string(),
            full_name: "Code Llama 7B".to_string(),
            context_window: Some(16_384),
            default_temperature: Some(0.2),
            cost: CostTier::Free,
            cost_per_mtok: TokenCost::FREE,
            free_tier: true,
            speed: SpeedTier::Fast,
            quality: QualityTier::Fair,
            best_for: tags(&["coding", "local-dev", "lightweight"]),
            notes: "Meta's Code Llama. Lightweight option. Requires ~5GB RAM.".to_string(),
        },
        ModelRecord {
            id: "llama3.2:3b".to_string(),
            engine: "ollama".to_string(),
            model: "llama3.2:3b".to_string(),
            full_name: "Llama 3.2 3B".to_string(),
            context_window: Some(128_000),
            default_temperature: Some(0.7),
            cost: CostTier::Free,
            cost_per_mtok: TokenCost::FREE,
            free_tier: true,
            speed: SpeedTier::VeryFast,
            quality: QualityTier::Fair,
            best_for: tags(&["simple-tasks", "lightweight", "prototyping"]),
            notes: "Ultra-lightweight general model. Fast inference. Requires ~2GB RAM.".to_string(),
        },
        ModelRecord {
            id: "llama3.2".to_string(),
            engine: "ollama".to_string(),
            model: "llama3.2".to_string(),
            full_name: "Llama 3.2".to_string(),
            context_window: Some(128_000),
            default_temperature: Some(0.7),
            cost: CostTier::Free,
            cost_per_mtok: TokenCost::FREE,
            free_tier: true,
            speed: SpeedTier::Medium,
            quality: QualityTier::Good,
            best_for: tags(&["general", "local-dev"]),
            notes: "General-purpose Llama model. Balanced performance.".to_string(),
        },
        ModelRecord {
            id: "llama3.1".to_string(),
            engine: "ollama".to_string(),
            model: "llama3.1".to_string(),
            full_name: "Llama 3.1".to_string(),
            context_window: Some(128_000),
            default_temperature: Some(0.7),
            cost: CostTier::Free,
            cost_per_mtok: TokenCost::FREE,
            free_tier: true,
            speed: SpeedTier::Medium,
            quality: QualityTier::Good,
            best_for: tags(&["general", "local-dev"]),
            notes: "Previous generation Llama. Still capable.".to_string(),
        },
        ModelRecord {
            id: "mistral".to_string(),
            engine: "ollama".to_string(),
            model: "mistral".to_string(),
            full_name: "Mistral 7B".to_string(),
            context_window: Some(32_768),
            default_temperature: Some(0.7),
            cost: CostTier::Free,
            cost_per_mtok: TokenCost::FREE,
            free_tier: true,
            speed: SpeedTier::Fast,
            quality: QualityTier::Good,
            best_for: tags(&["general", "lightweight"]),
            notes: "Mistral's 7B model. Good general performance. Requires ~5GB RAM.".to_string(),
        },
        ModelRecord {
            id: "deepseek-coder".to_string(),
            engine: "ollama".to_string(),
            model: "deepseek-coder".to_string(),
            full_name: "DeepSeek Coder".to_string(),
            context_window: Some(16_384),
            default_temperature: Some(0.2),
            cost: CostTier::Free,
            cost_per_mtok: TokenCost::FREE,
            free_tier: true,
            speed: SpeedTier::Medium,
            quality: QualityTier::Good,
            best_for: tags(&["coding", "local-dev"]),
            notes: "DeepSeek's original coding model.".to_string(),
        },
    ];
}
