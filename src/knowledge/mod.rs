pub mod project;
pub mod prompt;

use std::fmt::Write as _;

pub use project::{ProjectInfo, PROJECT};

pub const UNKNOWN_CATEGORY: &str =
    "❌ Unknown information type. Use: overview, technical, token, eras, or docs";

/// Static information pages rendered straight from the reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoCategory {
    Overview,
    Technical,
    Token,
    Eras,
    Docs,
}

impl InfoCategory {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "overview" => Some(Self::Overview),
            "technical" => Some(Self::Technical),
            "token" => Some(Self::Token),
            "eras" => Some(Self::Eras),
            "docs" => Some(Self::Docs),
            _ => None,
        }
    }

    pub fn render(self, info: &ProjectInfo) -> String {
        match self {
            Self::Overview => overview(info),
            Self::Technical => technical(info),
            Self::Token => token(info),
            Self::Eras => eras(info),
            Self::Docs => docs(info),
        }
    }
}

/// Format one of the static categories by name. Unknown names yield
/// [`UNKNOWN_CATEGORY`].
pub fn format_static_info(category: &str) -> String {
    match InfoCategory::parse(category) {
        Some(c) => c.render(&PROJECT),
        None => UNKNOWN_CATEGORY.to_string(),
    }
}

/// `era_1` -> `Era 1`
pub fn era_title(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn bullets(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn overview(info: &ProjectInfo) -> String {
    format!(
        "**{name} Project Overview**\n\n\
         🚀 **What is {name}?**\n\
         {name} is a decentralized blockchain platform that focuses on innovation, cross-chain interoperability, and sustainable blockchain technology.\n\n\
         🔗 **Official Resources:**\n\
         • Website: {website}\n\
         • Documentation: {documentation}\n\
         • Greenpaper: {greenpaper}\n\
         • Innovation Eras: {eras}\n\n\
         🌟 **Key Features:**\n\
         {features}\n\n\
         💎 **Native Token: {symbol}**\n\
         • Used for governance, staking, and network operations\n\
         • Powers the entire ecosystem\n\n\
         🏛️ **Governance:**\n\
         • DAO platform for decentralized decision-making\n\
         • Token-based voting system\n\
         • Community-driven development\n\n\
         🌐 **Networks:**\n\
         • pNode network for storage and mining\n\
         • vNode network for validation and consensus\n\
         • DevNet for testing and development",
        name = info.name,
        website = info.website,
        documentation = info.documentation,
        greenpaper = info.greenpaper,
        eras = info.innovation_eras_url,
        features = bullets(info.features),
        symbol = info.token.symbol,
    )
}

fn technical(info: &ProjectInfo) -> String {
    const ICONS: [&str; 10] = ["🔧", "⚡", "⏱️", "🚀", "💻", "📜", "🔗", "🖥️", "⚙️", "🏛️"];

    let mut out = String::from("**Technical Specifications**\n");
    for (icon, (label, value)) in ICONS.iter().zip(info.technical_specs.entries()) {
        let _ = write!(out, "\n{} **{}:** {}", icon, label, value);
    }
    out
}

fn token(info: &ProjectInfo) -> String {
    let token = &info.token;
    format!(
        "**{symbol} Token Information**\n\n\
         💎 **Token Details:**\n\
         • Name: {name}\n\
         • Symbol: {symbol}\n\
         • Chain: {chain}\n\
         • Mint Address: {mint}\n\
         • Solscan: {solscan}\n\
         • Total Supply: {supply}\n\
         • Decimals: {decimals}\n\n\
         🎯 **Use Cases:**\n\
         {use_cases}",
        name = token.name,
        symbol = token.symbol,
        chain = token.chain,
        mint = token.mint_address,
        solscan = token.solscan,
        supply = token.total_supply,
        decimals = token.decimals,
        use_cases = bullets(token.use_cases),
    )
}

fn eras(info: &ProjectInfo) -> String {
    let phases = info
        .innovation_eras
        .iter()
        .map(|(key, description)| format!("• **{}:** {}", era_title(key), description))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "**Innovation Eras Roadmap**\n\n📅 **Development Phases:**\n{}\n\n🔗 **Learn More:** {}",
        phases, info.innovation_eras_url
    )
}

fn docs(info: &ProjectInfo) -> String {
    format!(
        "**Documentation Resources**\n\n\
         📚 **Official Documentation:**\n\
         • Website: {}\n\
         • Documentation: {}\n\
         • Greenpaper: {}\n\
         • Innovation Eras: {}\n\n\
         🔧 **Technical Resources:**\n\
         • pNode Setup: {}\n\
         • vNode DevNet: {}\n\
         • DAO Platform: {}\n\n\
         🌐 **Community:**\n\
         • Discord: {}\n\
         • Twitter: {}\n\
         • GitHub: {}\n\
         • Linktree: {}",
        info.website,
        info.documentation,
        info.greenpaper,
        info.innovation_eras_url,
        info.pnodes.setup_guide,
        info.vnodes.devnet_home,
        info.dao.dao_platform,
        info.discord,
        info.twitter,
        info.github,
        info.linktree,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category() {
        assert_eq!(format_static_info("bogus"), UNKNOWN_CATEGORY);
        assert_eq!(format_static_info(""), UNKNOWN_CATEGORY);
    }

    #[test]
    fn test_every_category_contains_defining_field() {
        let cases = [
            ("overview", PROJECT.website),
            ("technical", PROJECT.technical_specs.consensus_algorithm),
            ("token", PROJECT.token.symbol),
            ("eras", "Foundation and Core Development"),
            ("docs", PROJECT.documentation),
        ];
        for (category, field) in cases {
            let out = format_static_info(category);
            assert!(!out.is_empty(), "{} is empty", category);
            assert!(out.contains(field), "{} missing {:?}", category, field);
        }
    }

    #[test]
    fn test_category_names_are_case_insensitive() {
        assert_eq!(InfoCategory::parse(" Technical "), Some(InfoCategory::Technical));
        assert_eq!(format_static_info("TOKEN"), format_static_info("token"));
    }

    #[test]
    fn test_technical_lists_every_spec() {
        let out = format_static_info("technical");
        assert_eq!(out.lines().filter(|l| l.contains(":**")).count(), 10);
        assert!(out.contains("⚡ **Consensus Algorithm:** Innovative consensus mechanism"));
    }

    #[test]
    fn test_era_title() {
        assert_eq!(era_title("era_1"), "Era 1");
        assert_eq!(era_title("global_adoption_phase"), "Global Adoption Phase");
        assert!(format_static_info("eras").contains("• **Era 5:** Global Adoption"));
    }
}
