//! Tool surface for hosts that call actions by name with JSON arguments.
//!
//! Each of the four lookups is a [`Tool`] with typed arguments and a
//! generated JSON schema. [`ToolRegistry`] holds all four behind the
//! object-safe [`ErasedTool`] so a host can list definitions and dispatch
//! `(name, arguments)` pairs.
//!
//! # Example
//!
//! ```rust,ignore
//! use hunter_client::{HunterClient, ToolRegistry};
//!
//! let tools = ToolRegistry::new(HunterClient::from_env());
//!
//! for def in tools.definitions() {
//!     println!("{}", def.to_function_format());
//! }
//!
//! let reply = tools
//!     .call("domain_search", r#"{"domain": "stripe.com", "limit": 5}"#)
//!     .await;
//! ```

use async_trait::async_trait;
use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::response::ToolResponse;
use crate::HunterClient;

/// A callable action with typed arguments.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The unique name of this tool.
    const NAME: &'static str;

    /// The argument type (must derive `Deserialize` and `JsonSchema`).
    type Args: DeserializeOwned + JsonSchema + Send;

    /// A description of what this tool does.
    fn description(&self) -> &str;

    /// Execute the tool. Never fails; errors are rendered into the response.
    async fn call(&self, args: Self::Args) -> ToolResponse;

    /// Generate the definition advertised to the host.
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: self.description().to_string(),
            parameters: parameters_schema::<Self::Args>(),
        }
    }
}

/// Name, description and parameter schema of a tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

impl ToolDefinition {
    /// Convert to the common function-calling format.
    pub fn to_function_format(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters
            }
        })
    }
}

fn parameters_schema<T: JsonSchema>() -> serde_json::Value {
    let schema = schema_for!(T);
    let mut value = serde_json::to_value(schema).unwrap_or_default();
    if let serde_json::Value::Object(map) = &mut value {
        map.remove("$schema");
        map.remove("title");
    }
    value
}

/// Type-erased tool for storing heterogeneous tools in collections.
#[async_trait]
pub trait ErasedTool: Send + Sync {
    fn name(&self) -> &str;

    fn definition(&self) -> ToolDefinition;

    /// Execute with JSON arguments.
    async fn call_erased(&self, arguments: &str) -> ToolResponse;
}

#[async_trait]
impl<T: Tool> ErasedTool for T {
    fn name(&self) -> &str {
        T::NAME
    }

    fn definition(&self) -> ToolDefinition {
        Tool::definition(self)
    }

    async fn call_erased(&self, arguments: &str) -> ToolResponse {
        let args: T::Args = match serde_json::from_str(arguments) {
            Ok(args) => args,
            Err(e) => {
                warn!(tool = T::NAME, error = %e, "Invalid tool arguments");
                return ToolResponse::Failure(format!("Invalid arguments for {}: {}", T::NAME, e));
            }
        };
        self.call(args).await
    }
}

/// Arguments for [`FindEmailByDomainAndName`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DomainAndNameArgs {
    /// The domain name to search (e.g., 'example.com')
    pub domain: String,
    /// The first name of the person
    pub first_name: String,
    /// The last name of the person
    pub last_name: String,
}

/// Arguments for [`FindEmailByCompanyAndName`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CompanyAndNameArgs {
    /// The company name to search
    pub company: String,
    /// The first name of the person
    pub first_name: String,
    /// The last name of the person
    pub last_name: String,
}

/// Arguments for [`FindEmailByFullName`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FullNameArgs {
    /// The domain name to search (e.g., 'example.com')
    pub domain: String,
    /// The full name of the person
    pub full_name: String,
}

/// Arguments for [`DomainSearch`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DomainSearchArgs {
    /// The domain name to search (e.g., 'example.com')
    pub domain: String,
    /// Maximum number of results to return (default: 10)
    #[serde(default)]
    pub limit: Option<u32>,
}

pub struct FindEmailByDomainAndName {
    client: HunterClient,
}

impl FindEmailByDomainAndName {
    pub fn new(client: HunterClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for FindEmailByDomainAndName {
    const NAME: &'static str = "find_email_by_domain_and_name";
    type Args = DomainAndNameArgs;

    fn description(&self) -> &str {
        "Find an email address using a domain and a person's name."
    }

    async fn call(&self, args: Self::Args) -> ToolResponse {
        self.client
            .find_email_by_domain_and_name(&args.domain, &args.first_name, &args.last_name)
            .await
    }
}

pub struct FindEmailByCompanyAndName {
    client: HunterClient,
}

impl FindEmailByCompanyAndName {
    pub fn new(client: HunterClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for FindEmailByCompanyAndName {
    const NAME: &'static str = "find_email_by_company_and_name";
    type Args = CompanyAndNameArgs;

    fn description(&self) -> &str {
        "Find an email address using a company name and a person's name."
    }

    async fn call(&self, args: Self::Args) -> ToolResponse {
        self.client
            .find_email_by_company_and_name(&args.company, &args.first_name, &args.last_name)
            .await
    }
}

pub struct FindEmailByFullName {
    client: HunterClient,
}

impl FindEmailByFullName {
    pub fn new(client: HunterClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for FindEmailByFullName {
    const NAME: &'static str = "find_email_by_full_name";
    type Args = FullNameArgs;

    fn description(&self) -> &str {
        "Find an email address using a domain and a person's full name."
    }

    async fn call(&self, args: Self::Args) -> ToolResponse {
        self.client
            .find_email_by_full_name(&args.domain, &args.full_name)
            .await
    }
}

pub struct DomainSearch {
    client: HunterClient,
}

impl DomainSearch {
    pub fn new(client: HunterClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for DomainSearch {
    const NAME: &'static str = "domain_search";
    type Args = DomainSearchArgs;

    fn description(&self) -> &str {
        "Find all email addresses for a domain."
    }

    async fn call(&self, args: Self::Args) -> ToolResponse {
        self.client.domain_search(&args.domain, args.limit).await
    }
}

/// All four Hunter tools, dispatchable by name.
pub struct ToolRegistry {
    tools: Vec<Box<dyn ErasedTool>>,
}

impl ToolRegistry {
    pub fn new(client: HunterClient) -> Self {
        Self {
            tools: vec![
                Box::new(FindEmailByDomainAndName::new(client.clone())),
                Box::new(FindEmailByCompanyAndName::new(client.clone())),
                Box::new(FindEmailByFullName::new(client.clone())),
                Box::new(DomainSearch::new(client)),
            ],
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&dyn ErasedTool> {
        self.tools
            .iter()
            .find(|t| t.name() == name)
            .map(|t| t.as_ref())
    }

    /// Dispatch a call by tool name with JSON-encoded arguments.
    pub async fn call(&self, name: &str, arguments: &str) -> ToolResponse {
        match self.get(name) {
            Some(tool) => {
                debug!(tool = name, "Dispatching tool call");
                tool.call_erased(arguments).await
            }
            None => ToolResponse::Failure(format!("Unknown tool: {}", name)),
        }
    }
}
