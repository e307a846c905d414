use super::MockBooker;

/// Run `f` and assert that the booking service was not contacted
#[allow(dead_code)]
pub async fn expect_no_upstream_calls<F, R, T>(booker: &MockBooker, f: F) -> T
where
	F: FnOnce() -> R,
	R: Future<Output = T>,
{
	let before = { booker.state().requests };

	let result = f().await;

	assert_eq!(
		before,
		booker.state().requests,
		"expected no calls to the booking service"
	);

	result
}

/// Run `f` and return the availability searches it caused
#[allow(dead_code)]
pub async fn collect_window_queries<F, R, T>(
	booker: &MockBooker,
	f: F,
) -> (T, Vec<(String, String)>)
where
	F: FnOnce() -> R,
	R: Future<Output = T>,
{
	let before = { booker.state().window_queries.len() };

	let result = f().await;

	let queries = booker.state().window_queries[before..].to_vec();

	(result, queries)
}
