//! Exit codes for the `echolens` binary. Part of the public contract.

use echolens_core::EchoError;

pub const SUCCESS: i32 = 0;
pub const PREDICTION_FAILED: i32 = 1; // Network, API or response error
pub const CONFIG_ERROR: i32 = 2; // Missing credential, bad input, bad data file
pub const IO_ERROR: i32 = 3; // Data file unreadable or report not written

pub fn for_error(err: &EchoError) -> i32 {
    match err {
        EchoError::MissingCredential
        | EchoError::InvalidHorizon { .. }
        | EchoError::HorizonNotANumber { .. }
        | EchoError::Data { .. } => CONFIG_ERROR,
        EchoError::Network { .. } | EchoError::Api { .. } | EchoError::InvalidResponse { .. } => {
            PREDICTION_FAILED
        }
        EchoError::Io { .. } => IO_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_failures_share_exit_code() {
        let errs = [
            EchoError::Network {
                message: "reset".into(),
            },
            EchoError::Api {
                status: 500,
                message: "boom".into(),
            },
            EchoError::InvalidResponse {
                message: "empty".into(),
            },
        ];
        for e in &errs {
            assert_eq!(for_error(e), PREDICTION_FAILED);
        }
        assert_eq!(for_error(&EchoError::MissingCredential), CONFIG_ERROR);
    }
}
