// Liveness and readiness checks, served outside the /api scope

pub mod controllers;
