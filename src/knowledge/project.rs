//! Static Xandeum reference data. Consumed as-is by formatting, guides and
//! the LLM prompt context.

pub struct PNodeLinks {
    pub setup_guide: &'static str,
    pub update_guide: &'static str,
    pub status_page: &'static str,
}

pub struct VNodeLinks {
    pub devnet_home: &'static str,
    pub validator_home: &'static str,
    pub faucet_repayment: &'static str,
    pub rpc_upgrade: &'static str,
}

pub struct TechnicalSpecs {
    pub blockchain_type: &'static str,
    pub consensus_algorithm: &'static str,
    pub block_time: &'static str,
    pub transaction_speed: &'static str,
    pub programming_language: &'static str,
    pub smart_contracts: &'static str,
    pub cross_chain: &'static str,
    pub pnode_network: &'static str,
    pub vnode_network: &'static str,
    pub dao_governance: &'static str,
}

impl TechnicalSpecs {
    /// Label/value pairs in display order.
    pub fn entries(&self) -> [(&'static str, &'static str); 10] {
        [
            ("Blockchain Type", self.blockchain_type),
            ("Consensus Algorithm", self.consensus_algorithm),
            ("Block Time", self.block_time),
            ("Transaction Speed", self.transaction_speed),
            ("Programming Language", self.programming_language),
            ("Smart Contracts", self.smart_contracts),
            ("Cross-Chain", self.cross_chain),
            ("pNode Network", self.pnode_network),
            ("vNode Network", self.vnode_network),
            ("DAO Governance", self.dao_governance),
        ]
    }
}

pub struct TokenInfo {
    pub name: &'static str,
    pub symbol: &'static str,
    pub chain: &'static str,
    pub mint_address: &'static str,
    pub solscan: &'static str,
    pub total_supply: &'static str,
    pub decimals: &'static str,
    pub use_cases: &'static [&'static str],
}

pub struct Hardware {
    pub cpu: &'static str,
    pub ram: &'static str,
    pub storage: &'static str,
    pub network: &'static str,
    pub os: &'static str,
}

pub struct NodeSpecs {
    pub hardware: Hardware,
    /// (service, description)
    pub services: &'static [(&'static str, &'static str)],
    pub setup_steps: &'static [&'static str],
}

pub struct DaoSpecs {
    pub dao_platform: &'static str,
    pub platform: &'static str,
    pub governance_type: &'static str,
    pub voting_power: &'static str,
    pub proposal_types: &'static [&'static str],
    pub features: &'static [&'static str],
}

pub struct ProjectInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub website: &'static str,
    pub documentation: &'static str,
    pub greenpaper: &'static str,
    pub innovation_eras_url: &'static str,
    pub github: &'static str,
    pub discord: &'static str,
    pub twitter: &'static str,
    pub linktree: &'static str,
    pub pnodes: PNodeLinks,
    pub vnodes: VNodeLinks,
    pub features: &'static [&'static str],
    pub technical_specs: TechnicalSpecs,
    pub token: TokenInfo,
    /// (network, status)
    pub network: &'static [(&'static str, &'static str)],
    pub pnode_specs: NodeSpecs,
    pub vnode_specs: NodeSpecs,
    pub dao: DaoSpecs,
    /// (era key, description)
    pub innovation_eras: &'static [(&'static str, &'static str)],
    /// (question, answer)
    pub faq: &'static [(&'static str, &'static str)],
}

pub static PROJECT: ProjectInfo = ProjectInfo {
    name: "Xandeum",
    description: "A decentralized blockchain platform with innovative consensus mechanisms and cross-chain interoperability",
    website: "https://xandeum.network",
    documentation: "https://docs.xandeum.network",
    greenpaper: "https://greenpaper.xandeum.network",
    innovation_eras_url: "https://www.xandeum.network/innovation-eras",
    github: "https://github.com/xandeum",
    discord: "https://discord.gg/xandeum",
    twitter: "https://twitter.com/xandeum",
    linktree: "https://linktr.ee/xandeum",
    pnodes: PNodeLinks {
        setup_guide: "https://pnodes.xandeum.network/",
        update_guide: "https://pnodes.xandeum.network/pnode-update-version",
        status_page: "https://pnodes.xandeum.network/#nyhpd",
    },
    vnodes: VNodeLinks {
        devnet_home: "https://devnet.xandeum.network/",
        validator_home: "https://devnet.xandeum.network/",
        faucet_repayment: "https://devnet.xandeum.network/faucet-repayment",
        rpc_upgrade: "https://devnet.xandeum.network/vnode-xandeum-rpc-upgrade-guide",
    },
    features: &[
        "Decentralized network with innovative consensus",
        "Cross-chain interoperability",
        "Smart contract platform",
        "Governance system",
        "Innovation eras roadmap",
        "Green and sustainable blockchain",
        "pNode network for storage and mining",
        "vNode network for validation and consensus",
        "DAO governance platform",
    ],
    technical_specs: TechnicalSpecs {
        blockchain_type: "Decentralized",
        consensus_algorithm: "Innovative consensus mechanism",
        block_time: "Optimized for performance",
        transaction_speed: "High throughput",
        programming_language: "Multi-language support",
        smart_contracts: "Yes",
        cross_chain: "Yes",
        pnode_network: "Yes",
        vnode_network: "Yes",
        dao_governance: "Yes",
    },
    token: TokenInfo {
        name: "XAND",
        symbol: "XAND",
        chain: "Solana",
        mint_address: "XANDuUoVoUqniKkpcKhrxmvYJybpJvUxJLr21Gaj3Hx",
        solscan: "https://solscan.io/token/XANDuUoVoUqniKkpcKhrxmvYJybpJvUxJLr21Gaj3Hx",
        total_supply: "To be announced",
        decimals: "To be determined",
        use_cases: &[
            "Network security",
            "Governance voting",
            "Transaction fees",
            "Cross-chain operations",
            "Staking rewards",
            "pNode rewards",
            "vNode rewards",
            "DAO governance",
        ],
    },
    network: &[
        ("mainnet", "In development"),
        ("testnet", "In development"),
        ("devnet", "Active - https://devnet.xandeum.network/"),
        ("explorer", "Coming soon"),
    ],
    pnode_specs: NodeSpecs {
        hardware: Hardware {
            cpu: "4+ cores",
            ram: "4+ GB",
            storage: "80+ GB SSD (60+ GB free for Xandeum)",
            network: "1 Gbps",
            os: "Ubuntu 24.04 LTS or later",
        },
        services: &[
            ("Xandminer", "Web GUI for pNode management"),
            ("Xandminerd", "Background service for mining operations"),
        ],
        setup_steps: &[],
    },
    vnode_specs: NodeSpecs {
        hardware: Hardware {
            cpu: "8+ cores (recommended)",
            ram: "16+ GB (recommended)",
            storage: "500+ GB SSD",
            network: "1 Gbps",
            os: "Ubuntu 24.04 LTS or later",
        },
        services: &[
            ("Validator", "Main validator service"),
            ("Xandeum RPC", "Xandeum RPC functions"),
            ("System Service", "System service management"),
            ("Logrotate", "Log rotation service"),
        ],
        setup_steps: &[
            "Old server housekeeping",
            "Access your server",
            "Ports setup",
            "Setup your disks",
            "Validator installation",
            "Setup system service",
            "Setup logrotate",
            "Starting your validator",
            "Monitoring your validator",
            "Onboarding",
        ],
    },
    dao: DaoSpecs {
        dao_platform: "https://dao.xandeum.network/dao/xand",
        platform: "Realms (Solana-based)",
        governance_type: "Token-based voting",
        voting_power: "Based on XAN token holdings",
        proposal_types: &[
            "Network upgrades",
            "Parameter changes",
            "Funding proposals",
            "Community initiatives",
        ],
        features: &[
            "Proposal creation",
            "Voting system",
            "Result execution",
            "Community discussion",
        ],
    },
    innovation_eras: &[
        ("era_1", "Foundation and Core Development"),
        ("era_2", "Network Launch and Expansion"),
        ("era_3", "Cross-chain Integration"),
        ("era_4", "Ecosystem Growth"),
        ("era_5", "Global Adoption"),
    ],
    faq: &[
        ("What is Xandeum?", "Xandeum is a decentralized blockchain platform that focuses on innovation, cross-chain interoperability, and sustainable blockchain technology. It features innovative consensus mechanisms and is designed for the future of decentralized applications."),
        ("What makes Xandeum unique?", "Xandeum stands out with its innovative consensus mechanisms, cross-chain interoperability features, and commitment to sustainable blockchain technology. The project follows a structured innovation eras roadmap."),
        ("What are Innovation Eras?", "Innovation Eras represent Xandeum's structured development phases, from foundation and core development to global adoption. Each era focuses on specific milestones and technological advancements."),
        ("Is Xandeum environmentally friendly?", "Yes, Xandeum is designed with sustainability in mind, featuring green blockchain technology and energy-efficient consensus mechanisms."),
        ("When will the mainnet launch?", "The mainnet launch timeline follows the Innovation Eras roadmap. Check the official documentation for the most current timeline."),
        ("How can I get involved?", "You can get involved by joining the Discord community, following the project on social media, and staying updated through the official documentation and greenpaper."),
        ("What is the XAND token?", "XAND is the native token of the Xandeum network, deployed on the Solana blockchain. Mint address: XANDuUoVoUqniKkpcKhrxmvYJybpJvUxJLr21Gaj3Hx. View on Solscan: https://solscan.io/token/XANDuUoVoUqniKkpcKhrxmvYJybpJvUxJLr21Gaj3Hx"),
        ("Where can I learn more?", "Visit the official website at xandeum.network, read the documentation at docs.xandeum.network, and check out the greenpaper for technical details."),
        ("What is a pNode?", "pNodes are storage provider nodes in the Xandeum network that store encrypted data and participate in the network's consensus mechanism. They earn rewards for providing storage and maintaining network integrity."),
        ("How do I set up a pNode?", "To set up a pNode, you need a VPS with at least 4 CPU cores, 4GB RAM, and 80GB SSD storage. Follow the setup guide at pnodes.xandeum.network for detailed instructions."),
        ("What ports does a pNode need?", "pNodes require UDP port 5000 for network communication, TCP port 3000 for the Xandminer Web GUI, and TCP port 4000 for the Xandminerd service."),
        ("How do I update my pNode?", "To update your pNode, SSH into your server and run the installer script with option 2 for upgrades. Follow the update guide at pnodes.xandeum.network/pnode-update-version for detailed steps."),
        ("What is a vNode?", "vNodes are validator nodes in the Xandeum network that participate in consensus and transaction validation. They help secure the network and earn rewards for their contribution."),
        ("How do I set up a vNode?", "To set up a vNode, you need a server with at least 8 CPU cores, 16GB RAM, and 500GB SSD storage. Follow the DevNet guide at devnet.xandeum.network for detailed instructions."),
        ("What ports does a vNode need?", "vNodes require TCP port 8000 for RPC, TCP port 8001 for P2P communication, and TCP port 8002 for metrics."),
        ("What is the DevNet?", "The Xandeum DevNet is the development network where validators can test and participate in the network. It's based on the Agave codebase v2.2.0 and provides a testing environment for the mainnet."),
        ("What is the Xandeum DAO?", "The Xandeum DAO is a decentralized governance platform where XAN token holders can participate in network decisions through voting on proposals."),
        ("How do I participate in DAO governance?", "To participate in DAO governance, you need XAN tokens. Visit the DAO platform at dao.xandeum.network/dao/xand to view proposals and vote."),
        ("What types of proposals can I vote on?", "DAO proposals can include network upgrades, parameter changes, funding proposals, and community initiatives. All proposals are voted on by XAN token holders."),
        ("How does DAO voting work?", "DAO voting is based on XAN token holdings. The more XAN tokens you hold, the more voting power you have. You can vote Yes, No, or abstain on proposals."),
    ],
};
