use std::fmt::Write as _;
use std::sync::Arc;

use super::project::{Hardware, ProjectInfo};

const GUIDELINES: &str = r#"**Important Guidelines:**
1. Always provide accurate, up-to-date information about Xandeum
2. Be helpful and informative in your responses
3. If you don't know something specific, direct users to official resources
4. Use a friendly, professional tone
5. Include relevant links when appropriate
6. For technical questions, provide detailed but accessible explanations
7. For DAO questions, emphasize the importance of governance participation
8. For node setup questions, provide step-by-step guidance
9. Always mention the official documentation and resources

**Keywords to recognize:**
- Xandeum, XAN, blockchain, decentralized, consensus
- pNode, storage, mining, xandminer, xandminerd
- vNode, validator, devnet, consensus, validation
- DAO, governance, voting, proposals, Realms, Solana
- innovation eras, roadmap, development phases
- technical specs, hardware requirements, ports
- setup guides, troubleshooting, monitoring"#;

/// The system prompt sent with every completion request.
///
/// Built once at startup and shared read-only between handlers.
#[derive(Debug, Clone)]
pub struct PromptContext {
    text: Arc<str>,
}

impl PromptContext {
    pub fn from_project(info: &ProjectInfo) -> Self {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "You are an AI assistant for the {} blockchain project. You have access to comprehensive information about:\n",
            info.name
        );

        out.push_str("**Project Overview:**\n");
        let _ = writeln!(out, "- {}", info.description);
        let _ = writeln!(out, "- Website: {}", info.website);
        let _ = writeln!(out, "- Documentation: {}", info.documentation);
        let _ = writeln!(out, "- Greenpaper: {}\n", info.greenpaper);

        section(&mut out, "Key Features", info.features.iter().map(|f| f.to_string()));
        section(
            &mut out,
            "Technical Specifications",
            info.technical_specs
                .entries()
                .iter()
                .map(|(label, value)| format!("{}: {}", label, value)),
        );
        section(
            &mut out,
            &format!("Token Information ({})", info.token.symbol),
            std::iter::once(format!(
                "Deployed on {}, mint address {}",
                info.token.chain, info.token.mint_address
            ))
            .chain(info.token.use_cases.iter().map(|u| u.to_string())),
        );
        section(
            &mut out,
            "Network Information",
            info.network.iter().map(|(net, status)| format!("{}: {}", net, status)),
        );

        out.push_str("**pNode Network:**\n");
        out.push_str("- pNodes are storage provider nodes that store encrypted data\n");
        let _ = writeln!(out, "- Setup guide: {}", info.pnodes.setup_guide);
        let _ = writeln!(out, "- Hardware requirements: {}", hardware(&info.pnode_specs.hardware));
        out.push_str("- Required ports: UDP 5000, TCP 3000, TCP 4000\n\n");

        out.push_str("**vNode Network:**\n");
        out.push_str("- vNodes are validator nodes that participate in consensus\n");
        let _ = writeln!(out, "- DevNet: {}", info.vnodes.devnet_home);
        let _ = writeln!(out, "- Hardware requirements: {}", hardware(&info.vnode_specs.hardware));
        out.push_str("- Required ports: TCP 8000, TCP 8001, TCP 8002\n\n");

        out.push_str("**DAO Governance:**\n");
        let _ = writeln!(out, "- DAO Platform: {}", info.dao.dao_platform);
        let _ = writeln!(out, "- Governance type: {}", info.dao.governance_type);
        let _ = writeln!(out, "- Voting power: {}", info.dao.voting_power);
        let _ = writeln!(out, "- Platform: {}", info.dao.platform);
        let _ = writeln!(out, "- Proposal types: {}", info.dao.proposal_types.join(", "));
        let _ = writeln!(out, "- Features: {}\n", info.dao.features.join(", "));

        section(
            &mut out,
            "Innovation Eras",
            info.innovation_eras
                .iter()
                .map(|(era, description)| format!("{}: {}", super::era_title(era), description)),
        );

        out.push_str("**Common Questions and Answers:**\n");
        for (question, answer) in info.faq {
            let _ = writeln!(out, "Q: {}\nA: {}\n", question, answer);
        }

        out.push_str(GUIDELINES);

        Self { text: Arc::from(out) }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

fn section(out: &mut String, title: &str, lines: impl Iterator<Item = String>) {
    let _ = writeln!(out, "**{}:**", title);
    for line in lines {
        let _ = writeln!(out, "- {}", line);
    }
    out.push('\n');
}

fn hardware(hw: &Hardware) -> String {
    format!(
        "CPU {}, RAM {}, storage {}, network {}, OS {}",
        hw.cpu, hw.ram, hw.storage, hw.network, hw.os
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::PROJECT;

    #[test]
    fn test_prompt_covers_reference_data() {
        let ctx = PromptContext::from_project(&PROJECT);
        let text = ctx.as_str();
        assert!(text.starts_with("You are an AI assistant for the Xandeum"));
        assert!(text.contains("Consensus Algorithm: Innovative consensus mechanism"));
        assert!(text.contains("Q: What ports does a pNode need?"));
        assert!(text.contains("Era 3: Cross-chain Integration"));
        assert!(text.contains(PROJECT.dao.dao_platform));
        assert!(text.ends_with("setup guides, troubleshooting, monitoring"));
    }

    #[test]
    fn test_clones_share_text() {
        let ctx = PromptContext::from_project(&PROJECT);
        let copy = ctx.clone();
        assert!(std::ptr::eq(ctx.as_str(), copy.as_str()));
    }
}
