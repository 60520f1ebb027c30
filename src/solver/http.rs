use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::Solver;
use crate::error::SolverError;
use crate::solution::SolutionStep;

const MIN_MOVES_ENDPOINT: &str = "calculate-moves";
const SOLVE_ENDPOINT: &str = "solve-tower";

/// Solver reached over HTTP.
///
/// `GET {base}/calculate-moves?numDisks=N` answers a bare JSON integer and
/// `GET {base}/solve-tower?numDisks=N` a JSON array of
/// `{"disk", "from", "to"}` objects.
pub struct HttpSolver {
    client: Client,
    base_url: String,
}

impl HttpSolver {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SolverError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SolverError::Client)?;

        Ok(HttpSolver {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str, disks: usize) -> String {
        format!("{}/{endpoint}?numDisks={disks}", self.base_url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, SolverError> {
        debug!(%url, "solver request");
        let response = match self.client.get(&url).send() {
            Ok(response) => response,
            Err(source) => return Err(SolverError::Request { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(SolverError::Status {
                url,
                status: status.as_u16(),
            });
        }

        match response.text() {
            Ok(body) => decode(url, &body),
            Err(source) => Err(SolverError::Request { url, source }),
        }
    }
}

fn decode<T: DeserializeOwned>(url: String, body: &str) -> Result<T, SolverError> {
    serde_json::from_str(body).map_err(|source| SolverError::Decode { url, source })
}

impl Solver for HttpSolver {
    fn minimum_moves(&self, disks: usize) -> Result<u64, SolverError> {
        self.get_json(self.url(MIN_MOVES_ENDPOINT, disks))
    }

    fn solve(&self, disks: usize) -> Result<Vec<SolutionStep>, SolverError> {
        self.get_json(self.url(SOLVE_ENDPOINT, disks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver(base: &str) -> HttpSolver {
        HttpSolver::new(base, Duration::from_secs(2)).unwrap()
    }

    #[test]
    fn test_urls() {
        let s = solver("http://localhost:8080/api/");
        assert_eq!(s.base_url(), "http://localhost:8080/api");
        assert_eq!(
            s.url(MIN_MOVES_ENDPOINT, 3),
            "http://localhost:8080/api/calculate-moves?numDisks=3"
        );
        assert_eq!(
            s.url(SOLVE_ENDPOINT, 10),
            "http://localhost:8080/api/solve-tower?numDisks=10"
        );
    }

    #[test]
    fn test_decode_min_moves() {
        let moves: u64 = decode("u".into(), "1023").unwrap();
        assert_eq!(moves, 1023);
    }

    #[test]
    fn test_decode_solution() {
        let body = r#"[{"disk":1,"from":0,"to":1},{"disk":2,"from":0,"to":2},{"disk":1,"from":1,"to":2}]"#;
        let steps: Vec<SolutionStep> = decode("u".into(), body).unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[1], SolutionStep::new(2, 0, 2));
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        let result: Result<Vec<SolutionStep>, _> = decode("http://x/solve-tower".into(), "<html>");
        match result {
            Err(SolverError::Decode { url, .. }) => assert_eq!(url, "http://x/solve-tower"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_unreachable_server_is_request_error() {
        let s = solver("http://127.0.0.1:1");
        assert!(matches!(
            s.minimum_moves(3),
            Err(SolverError::Request { .. })
        ));
    }
}
