// Copyright 2026 The netappfiles developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Drives `Cloud` against a scripted local HTTP server.
//!
//! Every reply is served on its own connection, in order, and every request
//! is recorded as `METHOD /path` together with its `Authorization` header.

use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use netappfiles::auth::ServicePrincipal;
use netappfiles::netapp::{CapacityPool, NetAppAccount, ProtocolType, ServiceLevel, Volume};
use netappfiles::{Cloud, ErrorKind, ResourceId};

static INIT: Once = Once::new();

const TOKEN_PATH: &str = "/tenant/oauth2/token";

#[derive(Debug)]
struct Reply {
    status: u16,
    headers: Vec<(&'static str, String)>,
    body: String,
}

impl Reply {
    fn json(status: u16, body: Value) -> Reply {
        Reply {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    fn empty(status: u16) -> Reply {
        Reply {
            status,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    fn token() -> Reply {
        Reply::json(
            200,
            json!({"access_token": "tok", "token_type": "Bearer", "expires_in": "3599"}),
        )
    }

    fn header(mut self, name: &'static str, value: Url) -> Reply {
        self.headers.push((name, value.to_string()));
        self
    }
}

#[derive(Debug, Clone)]
struct Request {
    line: String,
    authorization: Option<String>,
}

struct StubServer {
    base: Url,
    listener: Option<TcpListener>,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl StubServer {
    async fn bind() -> StubServer {
        INIT.call_once(|| {
            let _ = env_logger::builder().is_test(true).try_init();
        });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = Url::parse(&format!("http://{}/", listener.local_addr().unwrap())).unwrap();
        StubServer {
            base,
            listener: Some(listener),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn url(&self, path: &str) -> Url {
        self.base.join(path.trim_start_matches('/')).unwrap()
    }

    fn cloud(&self) -> Cloud {
        let auth = ServicePrincipal::new("tenant", "client", "secret", "0000")
            .with_authority(self.base.clone())
            .with_resource_manager(self.base.clone());
        Cloud::new(auth)
            .unwrap()
            .with_polling_interval(Duration::from_millis(10))
    }

    fn serve(&mut self, replies: Vec<Reply>) {
        let listener = self.listener.take().expect("serve is called once");
        let requests = self.requests.clone();
        let _ = tokio::spawn(async move {
            for reply in replies {
                let (mut stream, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(..) => return,
                };
                handle(&mut stream, &requests, reply).await;
            }
        });
    }

    fn lines(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.line.clone())
            .collect()
    }

    fn authorizations(&self) -> Vec<Option<String>> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.authorization.clone())
            .collect()
    }
}

async fn handle(stream: &mut TcpStream, requests: &Mutex<Vec<Request>>, reply: Reply) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next().unwrap().split(' ');
    let method = request_line.next().unwrap().to_string();
    let path = request_line.next().unwrap().split('?').next().unwrap().to_string();

    let mut content_length = 0;
    let mut authorization = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap();
            } else if name.eq_ignore_ascii_case("authorization") {
                authorization = Some(value.trim().to_string());
            }
        }
    }

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    requests.lock().unwrap().push(Request {
        line: format!("{} {}", method, path),
        authorization,
    });

    let status = StatusCode::from_u16(reply.status).unwrap();
    let mut response = format!(
        "HTTP/1.1 {} {}\r\nConnection: close\r\n",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );
    if status != StatusCode::NO_CONTENT {
        response.push_str(&format!(
            "Content-Type: application/json\r\nContent-Length: {}\r\n",
            reply.body.len()
        ));
    }
    for (name, value) in &reply.headers {
        response.push_str(&format!("{}: {}\r\n", name, value));
    }
    response.push_str("\r\n");
    response.push_str(&reply.body);
    stream.write_all(response.as_bytes()).await.unwrap();
    let _ = stream.shutdown().await;
}

fn pool_id() -> ResourceId {
    ResourceId::capacity_pool("0000", "rg", "acc1", "pool1")
}

fn volume_id() -> ResourceId {
    ResourceId::volume("0000", "rg", "acc1", "pool1", "vol1")
}

fn pool_body(state: &str) -> Value {
    json!({
        "id": pool_id().as_str(),
        "name": "acc1/pool1",
        "type": "Microsoft.NetApp/netAppAccounts/capacityPools",
        "location": "eastus",
        "properties": {
            "poolId": "9760acf5-4638-11e7-9bdb-020073ca7778",
            "size": 4398046511104u64,
            "serviceLevel": "Premium",
            "provisioningState": state
        }
    })
}

fn volume_body(state: &str) -> Value {
    json!({
        "id": volume_id().as_str(),
        "name": "acc1/pool1/vol1",
        "location": "eastus",
        "properties": {
            "creationToken": "vol1",
            "serviceLevel": "Premium",
            "usageThreshold": 107374182400u64,
            "subnetId": ResourceId::subnet("0000", "rg", "vnet", "default").as_str(),
            "protocolTypes": ["CIFS"],
            "provisioningState": state
        }
    })
}

#[tokio::test]
async fn test_resource_exists_reuses_token() {
    let mut server = StubServer::bind().await;
    let subnet = ResourceId::subnet("0000", "rg", "vnet", "default");
    server.serve(vec![
        Reply::token(),
        Reply::json(
            404,
            json!({"error": {"code": "NotFound", "message": "Subnet not found"}}),
        ),
        Reply::json(200, json!({"id": subnet.as_str(), "name": "default"})),
    ]);

    let cloud = server.cloud();
    assert!(!cloud.resource_exists(&subnet, "2020-05-01").await.unwrap());
    assert!(cloud.resource_exists(&subnet, "2020-05-01").await.unwrap());

    let get = format!("GET {}", subnet);
    assert_eq!(
        server.lines(),
        vec![format!("POST {}", TOKEN_PATH), get.clone(), get]
    );
    assert_eq!(
        server.authorizations(),
        vec![
            None,
            Some("Bearer tok".to_string()),
            Some("Bearer tok".to_string())
        ]
    );
}

#[tokio::test]
async fn test_token_failure() {
    let mut server = StubServer::bind().await;
    server.serve(vec![Reply::json(
        401,
        json!({"error": "invalid_client", "error_description": "Invalid client secret provided"}),
    )]);

    let err = server
        .cloud()
        .resource_exists(&pool_id(), "2019-11-01")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AuthenticationFailed);
    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    assert!(err.to_string().contains("Invalid client secret provided"));
    assert_eq!(server.lines(), vec![format!("POST {}", TOKEN_PATH)]);
}

#[tokio::test]
async fn test_create_pool_polls_async_operation() {
    let mut server = StubServer::bind().await;
    let operation = server.url(
        "/subscriptions/0000/providers/Microsoft.NetApp/locations/eastus/operationResults/op1",
    );
    server.serve(vec![
        Reply::token(),
        Reply::json(201, pool_body("Creating")).header("Azure-AsyncOperation", operation.clone()),
        Reply::json(200, json!({"status": "InProgress"})),
        Reply::json(200, json!({"status": "Succeeded"})),
        Reply::json(200, pool_body("Succeeded")),
    ]);

    let request = CapacityPool::new("eastus", ServiceLevel::Premium, 4398046511104);
    let pool = server
        .cloud()
        .create_pool(&pool_id(), &request)
        .await
        .unwrap();
    assert_eq!(pool.id, Some(pool_id()));
    assert_eq!(pool.properties.service_level, ServiceLevel::Premium);
    assert_eq!(pool.properties.provisioning_state.as_deref(), Some("Succeeded"));

    let poll = format!("GET {}", operation.path());
    assert_eq!(
        server.lines(),
        vec![
            format!("POST {}", TOKEN_PATH),
            format!("PUT {}", pool_id()),
            poll.clone(),
            poll,
            format!("GET {}", pool_id()),
        ]
    );
    assert!(server.authorizations()[1..]
        .iter()
        .all(|a| a.as_deref() == Some("Bearer tok")));
}

#[tokio::test]
async fn test_failed_async_operation() {
    let mut server = StubServer::bind().await;
    let operation = server.url("/operations/op2");
    server.serve(vec![
        Reply::token(),
        Reply::json(201, pool_body("Creating")).header("Azure-AsyncOperation", operation),
        Reply::json(
            200,
            json!({
                "status": "Failed",
                "error": {"code": "InvalidSubnet", "message": "Subnet is not delegated"}
            }),
        ),
    ]);

    let request = CapacityPool::new("eastus", ServiceLevel::Premium, 4398046511104);
    let err = server
        .cloud()
        .create_pool(&pool_id(), &request)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OperationFailed);
    assert_eq!(err.code(), Some("InvalidSubnet"));
    assert_eq!(server.lines().len(), 3);
}

#[tokio::test]
async fn test_create_volume_polls_provisioning_state() {
    let mut server = StubServer::bind().await;
    server.serve(vec![
        Reply::token(),
        Reply::json(200, volume_body("Creating")),
        Reply::json(200, volume_body("Creating")),
        Reply::json(200, volume_body("Succeeded")),
        Reply::json(200, volume_body("Succeeded")),
    ]);

    let request = Volume::new(
        "eastus",
        "vol1",
        ServiceLevel::Premium,
        107374182400,
        ResourceId::subnet("0000", "rg", "vnet", "default"),
        ProtocolType::Cifs,
    );
    let volume = server
        .cloud()
        .create_volume(&volume_id(), &request)
        .await
        .unwrap();
    assert_eq!(volume.properties.protocol_types, vec![ProtocolType::Cifs]);

    let get = format!("GET {}", volume_id());
    assert_eq!(
        server.lines(),
        vec![
            format!("POST {}", TOKEN_PATH),
            format!("PUT {}", volume_id()),
            get.clone(),
            get.clone(),
            get,
        ]
    );
}

#[tokio::test]
async fn test_failed_provisioning_state() {
    let mut server = StubServer::bind().await;
    let account_id = ResourceId::netapp_account("0000", "rg", "acc1");
    let failed = json!({
        "id": account_id.as_str(),
        "location": "eastus",
        "properties": {"provisioningState": "Failed"}
    });
    server.serve(vec![
        Reply::token(),
        Reply::json(
            200,
            json!({"location": "eastus", "properties": {"provisioningState": "Creating"}}),
        ),
        Reply::json(200, failed),
    ]);

    let err = server
        .cloud()
        .create_account(&account_id, &NetAppAccount::new("eastus"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OperationFailed);
    assert_eq!(server.lines().len(), 3);
}

#[tokio::test]
async fn test_rejected_request() {
    let mut server = StubServer::bind().await;
    server.serve(vec![
        Reply::token(),
        Reply::json(
            400,
            json!({"error": {"code": "InvalidParameter", "message": "Pool size is too small"}}),
        ),
    ]);

    let request = CapacityPool::new("eastus", ServiceLevel::Premium, 1);
    let err = server
        .cloud()
        .create_pool(&pool_id(), &request)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert_eq!(err.code(), Some("InvalidParameter"));
}

#[tokio::test]
async fn test_delete_follows_location_and_waits_for_propagation() {
    let mut server = StubServer::bind().await;
    let location = server.url("/subscriptions/0000/operationResults/del1");
    server.serve(vec![
        Reply::token(),
        Reply::empty(202).header("Location", location.clone()),
        Reply::empty(202),
        Reply::empty(200),
        Reply::json(200, volume_body("Deleting")),
        Reply::json(
            404,
            json!({"error": {"code": "ResourceNotFound", "message": "Volume not found"}}),
        ),
    ]);

    let cloud = server.cloud();
    cloud.delete_resource(&volume_id()).await.unwrap();
    cloud
        .wait_for_no_resource(&volume_id(), Duration::from_secs(5), Duration::from_millis(10))
        .await
        .unwrap();

    let poll = format!("GET {}", location.path());
    let get = format!("GET {}", volume_id());
    assert_eq!(
        server.lines(),
        vec![
            format!("POST {}", TOKEN_PATH),
            format!("DELETE {}", volume_id()),
            poll.clone(),
            poll,
            get.clone(),
            get,
        ]
    );
}

#[tokio::test]
async fn test_delete_of_missing_resource() {
    let mut server = StubServer::bind().await;
    server.serve(vec![Reply::token(), Reply::empty(204)]);

    server.cloud().delete_resource(&pool_id()).await.unwrap();
    assert_eq!(
        server.lines(),
        vec![format!("POST {}", TOKEN_PATH), format!("DELETE {}", pool_id())]
    );
}
