//! Integration tests for `ApiClient` over `HyperTransport`, using wiremock.

use gantry::{
    ApiClient, Body, ClientConfig, CollectionFormat, Decoded, FormValue, HyperTransport, Method,
    Operation, QueryParam,
};
use serde::{Deserialize, Serialize};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_string, header, method, path, query_param},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Instance {
    id: String,
    display_name: String,
}

fn client(server: &MockServer) -> ApiClient<HyperTransport> {
    ApiClient::new(HyperTransport::new(), server.uri()).expect("endpoint")
}

#[tokio::test]
async fn get_with_structured_parse() {
    let server = MockServer::start().await;

    let instance = Instance {
        id: "ocid1.instance.oc1..x".to_string(),
        display_name: "web-01".to_string(),
    };

    Mock::given(method("GET"))
        .and(path("/instances/i-1"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&instance))
        .mount(&server)
        .await;

    let op = Operation::builder("GetInstance", Method::GET, "/instances/i-1")
        .header("accept", Some("application/json"))
        .build();

    let Decoded { response, data }: Decoded<Instance> =
        client(&server).send_json(op).await.expect("response");

    assert_eq!(response.status(), 200);
    assert_eq!(data, instance);
}

#[tokio::test]
async fn post_json_body_yields_created() {
    let server = MockServer::start().await;

    #[derive(Debug, Serialize)]
    struct Launch {
        display_name: String,
        shape: String,
    }

    let created = Instance {
        id: "ocid1.instance.oc1..new".to_string(),
        display_name: "web-02".to_string(),
    };

    Mock::given(method("POST"))
        .and(path("/instances"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({
            "display_name": "web-02",
            "shape": "VM.Standard2.1",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(&created))
        .mount(&server)
        .await;

    let op = Operation::builder("LaunchInstance", Method::POST, "/instances")
        .json(&Launch {
            display_name: "web-02".to_string(),
            shape: "VM.Standard2.1".to_string(),
        })
        .expect("json body")
        .build();

    let Decoded { response, data }: Decoded<Instance> =
        client(&server).send_json(op).await.expect("response");

    assert_eq!(response.status(), 201);
    assert_eq!(data, created);
}

#[tokio::test]
async fn multi_format_sends_repeated_entries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/instances"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let op = Operation::builder("ListInstances", Method::GET, "/instances")
        .query(QueryParam::repeated(
            "lifecycleState",
            ["RUNNING", "STOPPED"],
            CollectionFormat::Multi,
        ))
        .build();

    client(&server).send(op).await.expect("response");

    let requests = server.received_requests().await.expect("recorded");
    let request = requests.first().expect("one request");
    let pairs: Vec<(String, String)> = request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("lifecycleState".to_string(), "RUNNING".to_string()),
            ("lifecycleState".to_string(), "STOPPED".to_string()),
        ]
    );
}

#[tokio::test]
async fn csv_format_sends_single_joined_entry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/instances"))
        .and(query_param("tags", "a,b,c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let op = Operation::builder("ListInstances", Method::GET, "/instances")
        .query(QueryParam::repeated(
            "tags",
            ["a", "b", "c"],
            CollectionFormat::Csv,
        ))
        .build();

    client(&server).send(op).await.expect("response");
}

#[tokio::test]
async fn unset_query_parameter_is_absent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/instances"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let op = Operation::builder("ListInstances", Method::GET, "/instances")
        .query(QueryParam::optional("page", None::<&str>))
        .query(QueryParam::single("limit", 10))
        .build();

    client(&server).send(op).await.expect("response");

    let requests = server.received_requests().await.expect("recorded");
    let request = requests.first().expect("one request");
    assert_eq!(request.url.query(), Some("limit=10"));
}

#[tokio::test]
async fn http_error_surfaces_the_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/instances/i-404"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"code": "NotAuthorizedOrNotFound"})),
        )
        .mount(&server)
        .await;

    let op = Operation::builder("GetInstance", Method::GET, "/instances/i-404").build();
    let err = client(&server).send(op).await.expect_err("http error");

    assert_eq!(err.status(), Some(404));
    let response = err.response().expect("response");
    let body: serde_json::Value = response.json().expect("error body");
    assert_eq!(body["code"], "NotAuthorizedOrNotFound");
}

#[tokio::test]
async fn form_body_is_urlencoded_on_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/actions"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string("action=STOP&instanceId=i-1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let op = Operation::builder("InstanceAction", Method::POST, "/actions")
        .body(Body::form(vec![
            ("action".to_string(), Some(FormValue::text("STOP"))),
            ("instanceId".to_string(), Some(FormValue::text("i-1"))),
            ("comment".to_string(), None),
        ]))
        .build();

    client(&server).send(op).await.expect("response");
}

#[tokio::test]
async fn multipart_body_carries_boundary() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/images"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let op = Operation::builder("ImportImage", Method::POST, "/images")
        .body(Body::multipart(vec![
            ("name".to_string(), Some(FormValue::text("base-image"))),
            (
                "payload".to_string(),
                Some(FormValue::file("image.img", None, vec![0x1F, 0x8B, 0x08])),
            ),
        ]))
        .build();

    client(&server).send(op).await.expect("response");

    let requests = server.received_requests().await.expect("recorded");
    let request = requests.first().expect("one request");
    let content_type = request
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .expect("content type");
    assert!(content_type.starts_with("multipart/form-data; boundary="));

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("name=\"payload\"; filename=\"image.img\""));
}

#[tokio::test]
async fn interceptors_compose_over_the_real_transport() {
    use gantry::interceptor::request_fn;

    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/instances"))
        .and(header("x-first", "1"))
        .and(header("x-second", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .request_interceptor(request_fn(|mut request, _| {
            request.insert_header("x-first", "1");
            Ok(request)
        }))
        .request_interceptor(request_fn(|mut request, _| {
            request.insert_header("x-second", "2");
            Ok(request)
        }))
        .build();

    let client =
        ApiClient::with_config(HyperTransport::new(), server.uri(), config).expect("endpoint");
    let op = Operation::builder("ListInstances", Method::GET, "/instances").build();

    let response = client.send(op).await.expect("response");
    assert!(response.is_success());
}
