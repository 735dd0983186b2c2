use super::*;

#[test]
fn join_url_avoids_double_slashes() {
    assert_eq!(join_url("http://localhost:8088/", "/api/mocks"), "http://localhost:8088/api/mocks");
    assert_eq!(join_url("http://localhost:8088", "api/mocks"), "http://localhost:8088/api/mocks");
}

#[test]
fn endpoint_is_rooted_at_base_url() {
    assert_eq!(endpoint("/actuator/health"), format!("{}/actuator/health", api_base_url()));
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn save_without_id_creates() {
    assert_eq!(
        save_route(&EditorTarget::New),
        SaveRoute { method: "POST", path: "/api/mocks".to_owned() }
    );
    assert_eq!(save_route(&EditorTarget::from_param(Some("new"))).method, "POST");
}

#[test]
fn save_with_id_updates() {
    assert_eq!(
        save_route(&EditorTarget::Existing("42".to_owned())),
        SaveRoute { method: "PUT", path: "/api/mocks/42".to_owned() }
    );
}

#[cfg(not(feature = "hydrate"))]
mod off_browser {
    use super::*;

    // The off-browser stubs resolve on first poll.
    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        use std::pin::pin;
        use std::task::{Context, Poll, Waker};

        let mut fut = pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(out) => out,
            Poll::Pending => panic!("off-browser stub should resolve immediately"),
        }
    }

    #[test]
    fn calls_are_unavailable_outside_browser() {
        assert_eq!(block_on(fetch_health()), Err(ApiError::Unavailable));
        assert_eq!(block_on(get_mock("1")), Err(ApiError::Unavailable));
        assert_eq!(block_on(save_mock(&EditorTarget::New, &Mock::default())), Err(ApiError::Unavailable));
        assert_eq!(block_on(update_mock("7", &Mock::default())), Err(ApiError::Unavailable));
        assert_eq!(block_on(export_mocks()), Err(ApiError::Unavailable));
    }
}
