// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use bytes::Bytes;
use http::{Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

#[derive(Clone)]
enum Reply {
    Fixed(u16, String),
    /// Answer with the request body, like the API server does for a create
    Echo(u16),
}

/// A request the mock received
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
}

/// A mock HTTP service that returns predefined responses based on request
/// paths and records every request it sees.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), Reply>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn on(self, method: &str, path: &str, reply: Reply) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), reply);
        self
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, Reply::Fixed(status, body.to_string()))
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, Reply::Fixed(status, body.to_string()))
    }

    /// Add a response for PATCH requests matching the exact path
    pub fn on_patch(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PATCH", path, Reply::Fixed(status, body.to_string()))
    }

    /// Accept POST requests on the path and return the posted object
    pub fn echo_post(self, path: &str) -> Self {
        self.on("POST", path, Reply::Echo(201))
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "https://kubernetes.default.svc")
    }

    /// All requests received so far, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// All requests other than reads
    pub fn mutations(&self) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method != "GET")
            .collect()
    }

    fn find_reply(&self, method: &str, path: &str) -> Option<Reply> {
        self.responses
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .cloned()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let reply = self.find_reply(&method, &path);
        let requests = self.requests.clone();

        Box::pin(async move {
            let request_body: Bytes = req.into_body().collect().await?.to_bytes();
            requests.lock().unwrap().push(RecordedRequest {
                method,
                path,
                body: serde_json::from_slice(&request_body).ok(),
            });

            let (status, body) = match reply {
                Some(Reply::Fixed(status, body)) => (status, body.into_bytes()),
                Some(Reply::Echo(status)) => (status, request_body.to_vec()),
                // Default 404 for unmatched requests
                None => (404, not_found_json("object", "unknown").into_bytes()),
            };

            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap())
        })
    }
}

/// API paths of the objects cluster-helper touches
pub mod paths {
    pub fn role_bindings(namespace: &str) -> String {
        format!("/apis/rbac.authorization.k8s.io/v1/namespaces/{}/rolebindings", namespace)
    }

    pub fn role_binding(namespace: &str, name: &str) -> String {
        format!("{}/{}", role_bindings(namespace), name)
    }

    pub fn secrets(namespace: &str) -> String {
        format!("/api/v1/namespaces/{}/secrets", namespace)
    }

    pub fn secret(namespace: &str, name: &str) -> String {
        format!("{}/{}", secrets(namespace), name)
    }

    pub fn service_account(namespace: &str, name: &str) -> String {
        format!("/api/v1/namespaces/{}/serviceaccounts/{}", namespace, name)
    }
}

/// Create a mock role binding JSON response
pub fn role_binding_json(namespace: &str, name: &str, cluster_role: &str) -> String {
    serde_json::json!({
        "apiVersion": "rbac.authorization.k8s.io/v1",
        "kind": "RoleBinding",
        "metadata": { "name": name, "namespace": namespace },
        "roleRef": {
            "apiGroup": "rbac.authorization.k8s.io",
            "kind": "ClusterRole",
            "name": cluster_role
        },
        "subjects": [{ "kind": "ServiceAccount", "name": "default", "namespace": namespace }]
    })
    .to_string()
}

/// Create a mock secret JSON response with base64 encoded data
pub fn secret_json(namespace: &str, name: &str, data: Value) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Secret",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": format!("{}-uid", name),
            "resourceVersion": "100"
        },
        "type": "kubernetes.io/dockerconfigjson",
        "data": data
    })
    .to_string()
}

/// Create a mock service account JSON response
pub fn service_account_json(namespace: &str, name: &str, pull_secrets: &[&str]) -> String {
    let mut sa = serde_json::json!({
        "apiVersion": "v1",
        "kind": "ServiceAccount",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "sa-uid",
            "resourceVersion": "7"
        },
        "secrets": [{ "name": format!("{}-token", name) }]
    });
    if !pull_secrets.is_empty() {
        sa["imagePullSecrets"] = pull_secrets
            .iter()
            .map(|s| serde_json::json!({ "name": s }))
            .collect();
    }
    sa.to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} \"{}\" not found", resource, name),
        "reason": "NotFound",
        "code": 404
    })
    .to_string()
}

/// Create a 409 conflict response
pub fn conflict_json(resource: &str, name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("Operation cannot be fulfilled on {} \"{}\": the object has been modified", resource, name),
        "reason": "Conflict",
        "code": 409
    })
    .to_string()
}
