use poem::http::StatusCode;
use poem::test::TestClient;
use poem::Endpoint;

use crate::prelude::*;
use crate::warcraftlogs::WarcraftLogsApi;
use crate::web::state::State;

fn create_test_client() -> Result<TestClient<impl Endpoint>> {
    let api = WarcraftLogsApi::new("test-key", StdDuration::from_secs(5))?;
    let state = State::new(api, "Liberation of Undermine".to_string());
    Ok(TestClient::new(super::create_app(state)))
}

#[tokio::test]
async fn get_health_ok() -> Result {
    let client = create_test_client()?;
    let response = client.get("/health").send().await;
    response.assert_status(StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn index_renders_the_form_ok() -> Result {
    let client = create_test_client()?;
    let response = client.get("/").send().await;
    response.assert_status_is_ok();
    response.assert_content_type("text/html; charset=utf-8");
    Ok(())
}

#[tokio::test]
async fn index_redirects_a_submitted_code_ok() -> Result {
    let client = create_test_client()?;
    let response = client.get("/?code=a1b2c3").send().await;
    response.assert_status(StatusCode::SEE_OTHER);
    response.assert_header("location", "/report/a1b2c3");
    Ok(())
}

#[tokio::test]
async fn theme_switch_redirects_back_ok() -> Result {
    let client = create_test_client()?;
    let response = client.get("/theme/light?next=/report/a1b2c3").send().await;
    response.assert_status(StatusCode::SEE_OTHER);
    response.assert_header("location", "/report/a1b2c3");
    Ok(())
}

#[tokio::test]
async fn unknown_theme_is_a_bad_request_ok() -> Result {
    let client = create_test_client()?;
    let response = client.get("/theme/solarized").send().await;
    response.assert_status(StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn missing_page_renders_not_found_ok() -> Result {
    let client = create_test_client()?;
    let response = client.get("/no-such-page").send().await;
    response.assert_status(StatusCode::NOT_FOUND);
    Ok(())
}
