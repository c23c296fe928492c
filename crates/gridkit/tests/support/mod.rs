#![allow(dead_code)]

use gridkit::{
    async_trait, FieldKind, FieldSchema, Json, Method, Result, SelectChoice, Table, Transport,
    UnexpectedFieldPolicy,
};
use serde_json::json;
use std::sync::{Arc, Mutex};

/// A request as seen by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub body: Option<Json>,
}

type Respond = dyn Fn(&Request) -> Result<Json> + Send + Sync;

/// In-memory transport that records every request and answers with a
/// caller-supplied function.
pub struct MockTransport {
    requests: Mutex<Vec<Request>>,
    respond: Box<Respond>,
}

impl MockTransport {
    pub fn new(respond: impl Fn(&Request) -> Result<Json> + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(MockTransport {
            requests: Mutex::new(vec![]),
            respond: Box::new(respond),
        })
    }

    /// A transport that echoes written records back as stored records.
    pub fn echo() -> Arc<Self> {
        MockTransport::new(|request| Ok(echo_records(request)))
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("requests", &self.requests)
            .finish()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(&self, method: Method, path: &str, body: Option<Json>) -> Result<Json> {
        let request = Request {
            method,
            path: path.to_string(),
            body,
        };
        let response = (self.respond)(&request);
        self.requests.lock().unwrap().push(request);
        response
    }
}

pub const CREATED_TIME: &str = "2024-05-01T09:30:00.000Z";

/// Turns the records of a write request into a `{records: [...]}` response.
/// Records without an id get `rec<Name>`.
pub fn echo_records(request: &Request) -> Json {
    let records = request.body.as_ref().unwrap()["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|record| {
            let id = match record.get("id") {
                Some(id) => id.as_str().unwrap().to_string(),
                None => format!("rec{}", record["fields"]["fldName"].as_str().unwrap()),
            };
            wire_record(&id, record["fields"].clone())
        })
        .collect::<Vec<_>>();

    json!({ "records": records })
}

pub fn wire_record(id: &str, fields: Json) -> Json {
    json!({ "id": id, "createdTime": CREATED_TIME, "fields": fields })
}

/// Query string pairs of a request path.
pub fn query_pairs(request: &Request) -> Vec<(String, String)> {
    let query = request.path.split_once('?').map_or("", |(_, query)| query);
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

pub fn query_param(request: &Request, key: &str) -> Option<String> {
    query_pairs(request)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

pub fn fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema::new("fldName", "Name", FieldKind::SingleLineText),
        FieldSchema::new("fldDone", "Done", FieldKind::Checkbox),
        FieldSchema::new("fldPriority", "Priority", FieldKind::Number),
        FieldSchema::new("fldStatus", "Status", FieldKind::SingleSelect).with_choices([
            SelectChoice::new("selTodo", "Todo"),
            SelectChoice::new("selDone", "Done"),
        ]),
    ]
}

pub fn table(transport: &Arc<MockTransport>) -> Table {
    table_with_policy(transport, UnexpectedFieldPolicy::default())
}

pub fn table_with_policy(transport: &Arc<MockTransport>, policy: UnexpectedFieldPolicy) -> Table {
    Table::builder(transport.clone(), "appBase", "Tasks")
        .fields(fields())
        .unexpected_fields(policy)
        .build()
        .unwrap()
}
