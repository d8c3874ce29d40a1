use serde::Serialize;

/// Body returned by the liveness and readiness probes.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub const fn ok() -> Self { Self { status: "OK" } }

    pub const fn failure() -> Self { Self { status: "Failure" } }
}
