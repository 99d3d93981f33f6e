//! Integration tests for the tagging client using wiremock
//!
//! The mock server stands in for the Resource Groups Tagging API endpoint so
//! the real SDK request/response path and the pagination driver are exercised
//! together.

use aws_sdk_resourcegroupstagging::config::retry::RetryConfig;
use aws_sdk_resourcegroupstagging::config::{BehaviorVersion, Credentials, Region};
use serde_json::{json, Value};
use tagscan::aws::client::TaggingClient;
use tagscan::resource::{collect_resources, RecordPolicy, TagSource, PAGE_SIZE};
use tagscan::ScanError;
use tokio_test::{assert_err, assert_ok};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TARGET: &str = "ResourceGroupsTaggingAPI_20170126.GetResources";
const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

fn client_for(server: &MockServer) -> TaggingClient {
    let conf = aws_sdk_resourcegroupstagging::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new("AKIDTEST", "secret", None, None, "test"))
        .endpoint_url(server.uri())
        .retry_config(RetryConfig::disabled())
        .build();
    TaggingClient::from_conf(conf)
}

fn page_body(arns: &[&str], token: &str) -> ResponseTemplate {
    let mappings: Vec<Value> = arns
        .iter()
        .map(|arn| {
            json!({
                "ResourceARN": arn,
                "Tags": [{"Key": "env", "Value": "test"}]
            })
        })
        .collect();
    let body = json!({
        "PaginationToken": token,
        "ResourceTagMappingList": mappings
    });
    ResponseTemplate::new(200).set_body_raw(body.to_string(), CONTENT_TYPE)
}

/// Mount a page that answers requests carrying `token`
async fn mount_page(server: &MockServer, token: &str, arns: &[&str], next: &str) {
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("x-amz-target", TARGET))
        .and(body_partial_json(json!({ "PaginationToken": token })))
        .respond_with(page_body(arns, next))
        .with_priority(1)
        .expect(1)
        .mount(server)
        .await;
}

/// Mount the first page; lower priority so token-specific mocks win
async fn mount_first_page(server: &MockServer, arns: &[&str], next: &str) {
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("x-amz-target", TARGET))
        .and(body_partial_json(json!({ "ResourcesPerPage": PAGE_SIZE })))
        .respond_with(page_body(arns, next))
        .with_priority(10)
        .expect(1)
        .mount(server)
        .await;
}

mod client_tests {
    use super::*;

    #[tokio::test]
    async fn test_single_page_is_converted() {
        let server = MockServer::start().await;
        mount_first_page(
            &server,
            &["arn:aws:ec2:us-east-1:123456789012:instance/i-0123abcd"],
            "",
        )
        .await;

        let client = client_for(&server);
        assert_eq!(client.region(), "us-east-1");

        let page = assert_ok!(client.get_page(PAGE_SIZE, None).await);
        assert_eq!(page.resources.len(), 1);
        assert_eq!(
            page.resources[0].arn,
            "arn:aws:ec2:us-east-1:123456789012:instance/i-0123abcd"
        );
        assert_eq!(page.resources[0].tags[0].key, "env");
        assert_eq!(page.resources[0].tags[0].value, "test");
        assert_eq!(page.next_token, None, "empty token must mean no more pages");
    }

    #[tokio::test]
    async fn test_service_error_carries_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("x-amz-target", TARGET))
            .respond_with(ResponseTemplate::new(400).set_body_raw(
                json!({
                    "__type": "InvalidParameterException",
                    "message": "bad region"
                })
                .to_string(),
                CONTENT_TYPE,
            ))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = assert_err!(client.get_page(PAGE_SIZE, None).await);
        assert_eq!(err.code.as_deref(), Some("InvalidParameterException"));
    }
}

mod pagination_tests {
    use super::*;

    #[tokio::test]
    async fn test_three_pages_are_collected_in_order() {
        let server = MockServer::start().await;
        mount_first_page(
            &server,
            &["arn:aws:ec2:us-east-1:123456789012:instance/i-1"],
            "t1",
        )
        .await;
        mount_page(&server, "t1", &["arn:aws:s3:::bucket-a"], "t2").await;
        mount_page(
            &server,
            "t2",
            &["arn:aws:ecs:us-east-1:123456789012:cluster/prod"],
            "",
        )
        .await;

        let client = client_for(&server);
        let report = assert_ok!(
            collect_resources(
                &client,
                "us-east-1",
                RecordPolicy::Skip,
                &CancellationToken::new()
            )
            .await
        );

        assert_eq!(report.pages, 3);
        let rows: Vec<(&str, Option<&str>, &str)> = report
            .records
            .iter()
            .map(|r| (r.service.as_str(), r.product.as_deref(), r.identifier.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("ec2", Some("instance"), "i-1"),
                ("s3", None, "bucket-a"),
                ("ecs", Some("cluster"), "prod"),
            ]
        );

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 3);
    }

    #[tokio::test]
    async fn test_api_error_aborts_with_page_index() {
        let server = MockServer::start().await;
        mount_first_page(&server, &["arn:aws:s3:::bucket-a"], "t1").await;
        Mock::given(method("POST"))
            .and(header("x-amz-target", TARGET))
            .and(body_partial_json(json!({ "PaginationToken": "t1" })))
            .respond_with(ResponseTemplate::new(400).set_body_raw(
                json!({
                    "__type": "PaginationTokenExpiredException",
                    "message": "token expired"
                })
                .to_string(),
                CONTENT_TYPE,
            ))
            .with_priority(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = assert_err!(
            collect_resources(
                &client,
                "us-east-1",
                RecordPolicy::Skip,
                &CancellationToken::new()
            )
            .await
        );

        match err {
            ScanError::Api { page, hint, .. } => {
                assert_eq!(page, 2);
                assert!(hint.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_strict_policy_stops_on_malformed_ec2_arn() {
        let server = MockServer::start().await;
        mount_first_page(
            &server,
            &[
                "arn:aws:s3:::bucket-a",
                "arn:aws:ec2:us-east-1:123456789012:i-no-product",
            ],
            "",
        )
        .await;

        let client = client_for(&server);
        let err = assert_err!(
            collect_resources(
                &client,
                "us-east-1",
                RecordPolicy::Abort,
                &CancellationToken::new()
            )
            .await
        );
        assert!(matches!(err, ScanError::MalformedResourcePath { .. }));
    }
}
