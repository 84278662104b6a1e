pub mod guides;
pub mod market;

use std::fmt::Write as _;
use std::sync::Arc;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::api::{mock, DataCategory, DataResult, DataSource};
use crate::knowledge::{InfoCategory, PROJECT};
use crate::llm::Responder;
use crate::ports::{self, NodeKind, PortChecker};

pub const INVALID_IP: &str =
    "❌ Invalid IP address format. Please provide a valid IP address (e.g., 192.168.1.100)";
pub const GENERIC_ERROR: &str = "❌ An error occurred while processing your command.";

/// Every command the bot answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Price,
    Stake,
    Validators,
    Governance,
    Network,
    Help,
    Overview,
    Technical,
    Token,
    Eras,
    Docs,
    PNode,
    PNodeSetup,
    PNodeUpdate,
    PNodePorts,
    VNode,
    VNodeSetup,
    VNodeUpdate,
    VNodePorts,
    Devnet,
    Ai,
    Dao,
    DaoProposals,
    DaoVote,
}

impl Command {
    pub const ALL: [Command; 24] = [
        Self::Price,
        Self::Stake,
        Self::Validators,
        Self::Governance,
        Self::Network,
        Self::Help,
        Self::Overview,
        Self::Technical,
        Self::Token,
        Self::Eras,
        Self::Docs,
        Self::PNode,
        Self::PNodeSetup,
        Self::PNodeUpdate,
        Self::PNodePorts,
        Self::VNode,
        Self::VNodeSetup,
        Self::VNodeUpdate,
        Self::VNodePorts,
        Self::Devnet,
        Self::Ai,
        Self::Dao,
        Self::DaoProposals,
        Self::DaoVote,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Stake => "stake",
            Self::Validators => "validators",
            Self::Governance => "governance",
            Self::Network => "network",
            Self::Help => "help",
            Self::Overview => "overview",
            Self::Technical => "technical",
            Self::Token => "token",
            Self::Eras => "eras",
            Self::Docs => "docs",
            Self::PNode => "pnode",
            Self::PNodeSetup => "pnode-setup",
            Self::PNodeUpdate => "pnode-update",
            Self::PNodePorts => "pnode-ports",
            Self::VNode => "vnode",
            Self::VNodeSetup => "vnode-setup",
            Self::VNodeUpdate => "vnode-update",
            Self::VNodePorts => "vnode-ports",
            Self::Devnet => "devnet",
            Self::Ai => "ai",
            Self::Dao => "dao",
            Self::DaoProposals => "dao-proposals",
            Self::DaoVote => "dao-vote",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Price => "Get current XAND price (when available)",
            Self::Stake => "Get staking information (when available)",
            Self::Validators => "List active validators (when available)",
            Self::Governance => "Show current governance proposals (when available)",
            Self::Network => "Show network status (when available)",
            Self::Help => "Show all available commands",
            Self::Overview => "Show project overview",
            Self::Technical => "Show technical specifications",
            Self::Token => "Show token information",
            Self::Eras => "Show innovation eras roadmap",
            Self::Docs => "Show documentation links",
            Self::PNode => "Show pNode information and setup guides",
            Self::PNodeSetup => "Show pNode setup requirements and guide",
            Self::PNodeUpdate => "Show pNode update instructions",
            Self::PNodePorts => "Test pNode port connectivity (requires IP address)",
            Self::VNode => "Show vNode information and setup guides",
            Self::VNodeSetup => "Show vNode setup requirements and guide",
            Self::VNodeUpdate => "Show vNode update instructions",
            Self::VNodePorts => "Test vNode port connectivity (requires IP address)",
            Self::Devnet => "Show DevNet information and resources",
            Self::Ai => "Ask the AI a question about Xandeum",
            Self::Dao => "Show DAO information and governance platform",
            Self::DaoProposals => "Show current DAO proposals (when available)",
            Self::DaoVote => "Show DAO voting information",
        }
    }
}

/// One inbound command invocation.
#[derive(Debug, Clone)]
pub struct CommandRequest {
    pub command: Command,
    /// Everything after the command name, untrimmed.
    pub args: String,
    /// Who/where it came from; only used for logging.
    pub origin: String,
}

impl CommandRequest {
    pub fn new(command: Command, args: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            command,
            args: args.into(),
            origin: origin.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum HandlerError {
    /// Bad or missing input; the message is shown to the user as-is.
    #[error("{0}")]
    Usage(String),
    #[error("no {category} data available: {detail}")]
    Data {
        category: DataCategory,
        detail: String,
    },
}

pub type HandlerResult = Result<String, HandlerError>;

/// Maps commands to handlers and renders their replies.
pub struct Dispatcher {
    data: Arc<dyn DataSource>,
    ports: PortChecker,
    ai: Arc<dyn Responder>,
    prefix: String,
}

impl Dispatcher {
    pub fn new(
        data: Arc<dyn DataSource>,
        ports: PortChecker,
        ai: Arc<dyn Responder>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            data,
            ports,
            ai,
            prefix: prefix.into(),
        }
    }

    /// Run the handler and turn its error, if any, into a reply.
    pub async fn dispatch(&self, request: &CommandRequest) -> String {
        info!(
            command = request.command.name(),
            origin = %request.origin,
            "command received"
        );

        match self.handle(request).await {
            Ok(reply) => reply,
            Err(HandlerError::Usage(message)) => message,
            Err(e) => {
                error!(command = request.command.name(), error = %e, "command failed");
                GENERIC_ERROR.to_string()
            }
        }
    }

    pub async fn handle(&self, request: &CommandRequest) -> HandlerResult {
        let info = &PROJECT;
        match request.command {
            Command::Price => Ok(market::price(&self.live(DataCategory::Price).await?)),
            Command::Stake => Ok(market::staking(&self.live(DataCategory::Staking).await?)),
            Command::Validators => {
                Ok(market::validators(&self.live(DataCategory::Validators).await?))
            }
            Command::Governance => {
                Ok(market::governance(&self.live(DataCategory::Governance).await?))
            }
            Command::Network => {
                Ok(market::network(&self.live(DataCategory::NetworkStatus).await?))
            }
            Command::Help => Ok(self.help()),
            Command::Overview => Ok(InfoCategory::Overview.render(info)),
            Command::Technical => Ok(InfoCategory::Technical.render(info)),
            Command::Token => Ok(InfoCategory::Token.render(info)),
            Command::Eras => Ok(InfoCategory::Eras.render(info)),
            Command::Docs => Ok(InfoCategory::Docs.render(info)),
            Command::PNode => Ok(guides::pnode(info)),
            Command::PNodeSetup => Ok(guides::pnode_setup(info)),
            Command::PNodeUpdate => Ok(guides::pnode_update(info)),
            Command::PNodePorts => self.check_ports(request, NodeKind::PNode).await,
            Command::VNode => Ok(guides::vnode(info)),
            Command::VNodeSetup => Ok(guides::vnode_setup(info)),
            Command::VNodeUpdate => Ok(guides::vnode_update(info)),
            Command::VNodePorts => self.check_ports(request, NodeKind::VNode).await,
            Command::Devnet => Ok(guides::devnet(info)),
            Command::Ai => self.ask(&request.args).await,
            Command::Dao => Ok(guides::dao(info)),
            Command::DaoProposals => Ok(guides::dao_proposals(info)),
            Command::DaoVote => Ok(guides::dao_vote(info)),
        }
    }

    /// Live data for `category`, or its mock payload when the API fails.
    async fn live(&self, category: DataCategory) -> Result<Map<String, Value>, HandlerError> {
        match self.data.fetch(category).await {
            DataResult::Data(map) => Ok(map),
            DataResult::Error(reason) => {
                warn!(%category, %reason, "remote data unavailable, using mock data");
                match mock::for_category(category) {
                    DataResult::Data(map) => Ok(map),
                    DataResult::Error(detail) => Err(HandlerError::Data { category, detail }),
                }
            }
        }
    }

    async fn check_ports(&self, request: &CommandRequest, kind: NodeKind) -> HandlerResult {
        let ip = request.args.split_whitespace().next().unwrap_or("");
        if ip.is_empty() {
            return Err(HandlerError::Usage(format!(
                "Please provide an IP address. Example: `{}{} 192.168.1.100`",
                self.prefix,
                request.command.name()
            )));
        }

        let addr = ports::parse_ipv4(ip).ok_or_else(|| HandlerError::Usage(INVALID_IP.to_string()))?;
        let results = self.ports.check_all(addr, kind).await;
        let open = results.iter().filter(|r| r.open).count();
        info!(%addr, %kind, open, total = results.len(), "port check complete");

        Ok(ports::format_report(addr, &results, kind))
    }

    async fn ask(&self, question: &str) -> HandlerResult {
        let question = question.trim();
        if question.is_empty() {
            return Err(HandlerError::Usage(format!(
                "Please provide a question. Example: `{}ai What is Xandeum?`",
                self.prefix
            )));
        }
        Ok(self.ai.respond(question).await)
    }

    fn help(&self) -> String {
        let p = &self.prefix;
        let mut out = format!("**{} AI Bot Commands**\n\n**Information Commands:**\n", PROJECT.name);
        for command in Command::ALL {
            let _ = writeln!(out, "• `{}{}` - {}", p, command.name(), command.description());
        }

        let _ = write!(
            out,
            "\n**AI Features:**\n\
             • Mention the bot or use `{p}ai` to ask questions\n\
             • Ask about {name} project details\n\
             • Get technical information and support\n\n\
             **Quick Info:**\n\
             • `{p}overview` - Project overview\n\
             • `{p}token` - Token information (XAND, Solana)\n\
             • `{p}pnode` / `{p}vnode` - Node guides\n\
             • `{p}pnode-ports <ip>` / `{p}vnode-ports <ip>` - Port connectivity test\n\
             • `{p}dao` - DAO information and governance",
            p = p,
            name = PROJECT.name,
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{PortProbe, Protocol};
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::net::Ipv4Addr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct FailingSource {
        reason: &'static str,
        calls: Mutex<Vec<DataCategory>>,
    }

    impl FailingSource {
        fn new(reason: &'static str) -> Self {
            Self {
                reason,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl DataSource for FailingSource {
        async fn fetch(&self, category: DataCategory) -> DataResult {
            self.calls.lock().unwrap().push(category);
            DataResult::Error(self.reason.to_string())
        }
    }

    struct FixedSource(Value);

    #[async_trait]
    impl DataSource for FixedSource {
        async fn fetch(&self, _category: DataCategory) -> DataResult {
            match &self.0 {
                Value::Object(map) => DataResult::Data(map.clone()),
                _ => DataResult::Error("not an object".to_string()),
            }
        }
    }

    struct OpenPorts(HashSet<u16>);

    #[async_trait]
    impl PortProbe for OpenPorts {
        async fn check_port(&self, ip: Ipv4Addr, port: u16, protocol: Protocol) -> (bool, String) {
            if self.0.contains(&port) {
                (true, format!("✅ {} {} is OPEN on {}", protocol, port, ip))
            } else {
                (false, format!("❌ {} {} is CLOSED on {}", protocol, port, ip))
            }
        }
    }

    #[derive(Default)]
    struct CountingResponder {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Responder for CountingResponder {
        async fn respond(&self, user_message: &str) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            format!("answer to: {}", user_message)
        }
    }

    fn dispatcher_with(
        data: Arc<dyn DataSource>,
        open: &[u16],
        ai: Arc<CountingResponder>,
    ) -> Dispatcher {
        let probe = Arc::new(OpenPorts(open.iter().copied().collect()));
        Dispatcher::new(data, PortChecker::new(probe), ai, "!")
    }

    fn dispatcher() -> Dispatcher {
        dispatcher_with(
            Arc::new(FailingSource::new("Status 500")),
            &[],
            Arc::new(CountingResponder::default()),
        )
    }

    async fn run(d: &Dispatcher, command: Command, args: &str) -> String {
        d.dispatch(&CommandRequest::new(command, args, "test#0")).await
    }

    #[test]
    fn test_command_names_are_unique() {
        let names: HashSet<&str> = Command::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), Command::ALL.len());
        assert!(Command::ALL.iter().all(|c| !c.description().is_empty()));
    }

    #[tokio::test]
    async fn test_remote_error_falls_back_to_mock_for_every_category() {
        let cases = [
            (Command::Network, DataCategory::NetworkStatus, market::network as fn(&Map<String, Value>) -> String),
            (Command::Price, DataCategory::Price, market::price),
            (Command::Stake, DataCategory::Staking, market::staking),
            (Command::Validators, DataCategory::Validators, market::validators),
            (Command::Governance, DataCategory::Governance, market::governance),
        ];

        for (command, category, render) in cases {
            let source = Arc::new(FailingSource::new("timed out"));
            let d = dispatcher_with(source.clone(), &[], Arc::new(CountingResponder::default()));

            let DataResult::Data(mock) = mock::for_category(category) else {
                panic!("missing mock for {}", category);
            };
            assert_eq!(run(&d, command, "").await, render(&mock), "{:?}", command);
            assert_eq!(*source.calls.lock().unwrap(), vec![category]);
        }
    }

    #[tokio::test]
    async fn test_price_with_500_uses_mock_price() {
        let out = run(&dispatcher(), Command::Price, "").await;
        assert!(out.contains("💰 Price: $0.25"));
        assert!(out.contains("💎 Market Cap: $25,000,000"));
    }

    #[tokio::test]
    async fn test_live_data_is_rendered() {
        let source = Arc::new(FixedSource(serde_json::json!({
            "price_usd": 0.31,
            "change_24h": -1.2,
            "market_cap": 31000000,
            "volume_24h": 2500000
        })));
        let d = dispatcher_with(source, &[], Arc::new(CountingResponder::default()));
        let out = run(&d, Command::Price, "").await;
        assert!(out.contains("$0.31"));
        assert!(out.contains("-1.2%"));
        assert!(out.contains("$2,500,000"));
    }

    #[tokio::test]
    async fn test_ports_without_ip() {
        let d = dispatcher();
        assert_eq!(
            run(&d, Command::PNodePorts, "").await,
            "Please provide an IP address. Example: `!pnode-ports 192.168.1.100`"
        );
        assert_eq!(
            run(&d, Command::VNodePorts, "   ").await,
            "Please provide an IP address. Example: `!vnode-ports 192.168.1.100`"
        );
    }

    #[tokio::test]
    async fn test_ports_with_invalid_ip() {
        assert_eq!(run(&dispatcher(), Command::PNodePorts, "999.1.1.1").await, INVALID_IP);
    }

    #[tokio::test]
    async fn test_vnode_ports_partial() {
        let d = dispatcher_with(
            Arc::new(FailingSource::new("unused")),
            &[8000, 8001],
            Arc::new(CountingResponder::default()),
        );
        let out = run(&d, Command::VNodePorts, "10.0.0.5").await;

        assert!(out.contains("✅ TCP 8000 is OPEN on 10.0.0.5"));
        assert!(out.contains("✅ TCP 8001 is OPEN on 10.0.0.5"));
        assert!(out.contains("❌ TCP 8002 is CLOSED on 10.0.0.5"));
        assert!(out.contains("2/3 required ports are open"));
        assert!(out.contains("Some ports are closed. Check your firewall settings."));
    }

    #[tokio::test]
    async fn test_pnode_ports_all_open() {
        let d = dispatcher_with(
            Arc::new(FailingSource::new("unused")),
            &[5000, 3000, 4000],
            Arc::new(CountingResponder::default()),
        );
        let out = run(&d, Command::PNodePorts, "192.168.1.100 extra").await;
        assert!(out.contains("✅ UDP 5000 is OPEN on 192.168.1.100"));
        assert!(out.contains("3/3 required ports are open"));
        assert!(out.contains("All ports are open! Your pNode should work properly."));
    }

    #[tokio::test]
    async fn test_ai_without_question_skips_responder() {
        let ai = Arc::new(CountingResponder::default());
        let d = dispatcher_with(Arc::new(FailingSource::new("unused")), &[], ai.clone());

        assert_eq!(
            run(&d, Command::Ai, "").await,
            "Please provide a question. Example: `!ai What is Xandeum?`"
        );
        assert_eq!(ai.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_ai_forwards_trimmed_question() {
        let ai = Arc::new(CountingResponder::default());
        let d = dispatcher_with(Arc::new(FailingSource::new("unused")), &[], ai.clone());

        assert_eq!(
            run(&d, Command::Ai, "  What is a pNode?  ").await,
            "answer to: What is a pNode?"
        );
        assert_eq!(ai.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_help_lists_every_command() {
        let out = run(&dispatcher(), Command::Help, "").await;
        for command in Command::ALL {
            assert!(out.contains(&format!("`!{}`", command.name())), "{}", command.name());
        }
    }

    #[tokio::test]
    async fn test_every_command_produces_a_reply() {
        let d = dispatcher();
        for command in Command::ALL {
            let out = run(&d, command, "").await;
            assert!(!out.is_empty(), "{}", command.name());
            assert_ne!(out, GENERIC_ERROR, "{}", command.name());
        }
    }

    #[test]
    fn test_data_error_is_generic() {
        let err = HandlerError::Data {
            category: DataCategory::Price,
            detail: "Unknown data type".to_string(),
        };
        assert_eq!(err.to_string(), "no price data available: Unknown data type");
    }
}
