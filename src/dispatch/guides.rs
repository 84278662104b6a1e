//! Node, DevNet and DAO guides built from the reference data.

use crate::knowledge::bullets;
use crate::knowledge::project::{Hardware, NodeSpecs, ProjectInfo};
use crate::ports::NodeKind;

fn hardware(hw: &Hardware) -> String {
    format!(
        "🖥️ **Hardware Requirements:**\n\
         • CPU: {}\n\
         • RAM: {}\n\
         • Storage: {}\n\
         • Network: {}\n\
         • OS: {}",
        hw.cpu, hw.ram, hw.storage, hw.network, hw.os
    )
}

fn required_ports(kind: NodeKind) -> String {
    let lines = kind
        .ports()
        .iter()
        .map(|p| format!("• {} - {}", p, p.purpose))
        .collect::<Vec<_>>()
        .join("\n");
    format!("🔌 **Required Ports:**\n{}", lines)
}

fn services(specs: &NodeSpecs) -> String {
    let lines = specs
        .services
        .iter()
        .map(|(name, description)| format!("• {} - {}", name, description))
        .collect::<Vec<_>>()
        .join("\n");
    format!("⚙️ **Services:**\n{}", lines)
}

pub fn pnode(info: &ProjectInfo) -> String {
    format!(
        "**pNode Information**\n\n\
         🔗 **Resources:**\n\
         • Setup Guide: {}\n\
         • Update Guide: {}\n\
         • Status Page: {}\n\n\
         {}\n\n{}\n\n{}",
        info.pnodes.setup_guide,
        info.pnodes.update_guide,
        info.pnodes.status_page,
        hardware(&info.pnode_specs.hardware),
        required_ports(NodeKind::PNode),
        services(&info.pnode_specs),
    )
}

pub fn pnode_setup(info: &ProjectInfo) -> String {
    format!(
        "**pNode Setup Guide:**\n\n\
         📖 **Official Setup Guide:** {}\n\n\
         🔄 **Update Instructions:** {}\n\n\
         {}\n\n\
         💡 **Tips:**\n\
         • Make sure all required ports are open\n\
         • Use {}\n\
         • Ensure you have sufficient storage space\n\
         • Check your firewall settings",
        info.pnodes.setup_guide,
        info.pnodes.update_guide,
        services(&info.pnode_specs),
        info.pnode_specs.hardware.os,
    )
}

pub fn pnode_update(info: &ProjectInfo) -> String {
    format!(
        "**pNode Update Guide**\n\n\
         📖 **Official Update Guide:** {}\n\n\
         🔄 **Update Process:**\n\
         1. SSH into your pNode server\n\
         2. Run the installer script with option 2 for upgrades\n\
         3. Follow the official guide for detailed steps\n\
         4. Restart services if required\n\n\
         💡 **Tips:**\n\
         • Always backup your configuration before updating\n\
         • Check the official guide for the latest instructions\n\
         • Monitor your pNode after updates",
        info.pnodes.update_guide,
    )
}

pub fn vnode(info: &ProjectInfo) -> String {
    format!(
        "**vNode Information**\n\n\
         🔗 **Resources:**\n\
         • DevNet Home: {}\n\
         • Validator Home: {}\n\
         • Faucet Repayment: {}\n\
         • RPC Upgrade Guide: {}\n\n\
         {}\n\n{}\n\n{}",
        info.vnodes.devnet_home,
        info.vnodes.validator_home,
        info.vnodes.faucet_repayment,
        info.vnodes.rpc_upgrade,
        hardware(&info.vnode_specs.hardware),
        required_ports(NodeKind::VNode),
        services(&info.vnode_specs),
    )
}

pub fn vnode_setup(info: &ProjectInfo) -> String {
    let steps = info
        .vnode_specs
        .setup_steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "**vNode Setup Guide:**\n\n\
         📖 **DevNet Home:** {}\n\n\
         🔄 **Setup Steps:**\n{}\n\n\
         {}\n\n\
         💡 **Tips:**\n\
         • Make sure all required ports are open\n\
         • Use {}\n\
         • Ensure you have sufficient storage space ({})\n\
         • Check your firewall settings\n\
         • Monitor your validator regularly",
        info.vnodes.devnet_home,
        steps,
        services(&info.vnode_specs),
        info.vnode_specs.hardware.os,
        info.vnode_specs.hardware.storage,
    )
}

pub fn vnode_update(info: &ProjectInfo) -> String {
    format!(
        "**vNode Update Guide**\n\n\
         📖 **RPC Upgrade Guide:** {}\n\n\
         🔄 **Update Process:**\n\
         1. SSH into your vNode server\n\
         2. Follow the RPC upgrade guide for detailed steps\n\
         3. Restart validator services if required\n\
         4. Monitor your validator after updates\n\n\
         💡 **Tips:**\n\
         • Always backup your configuration before updating\n\
         • Check the official guide for the latest instructions\n\
         • Monitor your validator after updates\n\
         • Test on DevNet before mainnet",
        info.vnodes.rpc_upgrade,
    )
}

pub fn devnet(info: &ProjectInfo) -> String {
    format!(
        "**{} DevNet Information:**\n\n\
         🌐 **DevNet Home:** {}\n\n\
         📋 **Available Resources:**\n\
         • Validator Home: {}\n\
         • Faucet Repayment: {}\n\
         • RPC Upgrade Guide: {}\n\n\
         🔧 **DevNet Details:**\n\
         • Based on Agave codebase v2.2.0\n\
         • Testing environment for mainnet\n\
         • Active validator network\n\
         • Faucet available for testing\n\n\
         💡 **Getting Started:**\n\
         • Visit the DevNet home page\n\
         • Follow the validator setup guide\n\
         • Join the community for support",
        info.name,
        info.vnodes.devnet_home,
        info.vnodes.validator_home,
        info.vnodes.faucet_repayment,
        info.vnodes.rpc_upgrade,
    )
}

pub fn dao(info: &ProjectInfo) -> String {
    let dao = &info.dao;
    format!(
        "**{} DAO Information**\n\n\
         🔗 **DAO Platform:** {}\n\n\
         🏛️ **Governance Type:** {}\n\
         🗳️ **Voting Power:** {}\n\
         📋 **Platform:** {}\n\n\
         📋 **Proposal Types:**\n{}\n\n\
         ⚙️ **Features:**\n{}\n\n\
         💡 **How to Participate:**\n\
         • Hold {sym} tokens to get voting power\n\
         • Visit the DAO platform to view proposals\n\
         • Vote on proposals that interest you\n\
         • Participate in community discussions",
        info.name,
        dao.dao_platform,
        dao.governance_type,
        dao.voting_power,
        dao.platform,
        bullets(dao.proposal_types),
        bullets(dao.features),
        sym = info.token.symbol,
    )
}

pub fn dao_proposals(info: &ProjectInfo) -> String {
    format!(
        "**DAO Proposals**\n\n\
         📋 **DAO Platform:** {platform}\n\n\
         🔍 **To view current proposals:**\n\
         1. Visit the DAO platform\n\
         2. Connect your wallet with {sym} tokens\n\
         3. Browse active proposals\n\
         4. Read proposal details and discussions\n\
         5. Cast your vote\n\n\
         💡 **Proposal Types:**\n\
         • Network upgrades and parameter changes\n\
         • Funding proposals for development\n\
         • Community initiatives and events\n\
         • Governance structure changes\n\n\
         🗳️ **Voting:**\n\
         • Voting power based on {sym} token holdings\n\
         • You can vote Yes, No, or abstain\n\
         • Results are executed automatically if passed",
        platform = info.dao.dao_platform,
        sym = info.token.symbol,
    )
}

pub fn dao_vote(info: &ProjectInfo) -> String {
    format!(
        "**DAO Voting Information**\n\n\
         🗳️ **How Voting Works:**\n\
         • Voting power is based on your {sym} token holdings\n\
         • More tokens = more voting power\n\
         • You can vote Yes, No, or abstain on proposals\n\n\
         📋 **Voting Process:**\n\
         1. Visit: {platform}\n\
         2. Connect your wallet containing {sym} tokens\n\
         3. Browse active proposals\n\
         4. Read proposal details and community discussion\n\
         5. Cast your vote before the deadline\n\n\
         💡 **Tips:**\n\
         • Read proposal details carefully before voting\n\
         • Participate in community discussions\n\
         • Consider the long-term impact of proposals\n\
         • Your vote helps shape the network's future\n\n\
         🔗 **DAO Platform:** {platform}",
        platform = info.dao.dao_platform,
        sym = info.token.symbol,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::PROJECT;

    #[test]
    fn test_pnode_lists_required_ports_in_order() {
        let out = pnode(&PROJECT);
        let udp = out.find("• UDP 5000 - pNode communication").unwrap();
        let gui = out.find("• TCP 3000 - Xandminer Web GUI").unwrap();
        let svc = out.find("• TCP 4000 - Xandminerd service").unwrap();
        assert!(udp < gui && gui < svc);
        assert!(out.contains("• CPU: 4+ cores"));
    }

    #[test]
    fn test_vnode_setup_numbers_every_step() {
        let out = vnode_setup(&PROJECT);
        assert!(out.contains("1. Old server housekeeping"));
        assert!(out.contains("10. Onboarding"));
        assert!(out.contains("(500+ GB SSD)"));
    }

    #[test]
    fn test_dao_pages_link_platform() {
        for page in [dao(&PROJECT), dao_proposals(&PROJECT), dao_vote(&PROJECT)] {
            assert!(page.contains("https://dao.xandeum.network/dao/xand"));
        }
        assert!(dao(&PROJECT).contains("📋 **Platform:** Realms (Solana-based)"));
    }
}
