//! accdisc — accuracy/discretisation trade-off curves.
//!
//! Evaluates the piecewise-maximum error bound
//! `max(alpha*dt, beta*eps_a, gamma*eps_b/dt)` over a log-spaced sweep
//! of the timestep `dt`, one curve per `(eps_a, eps_b)` tolerance pair,
//! and renders all curves on a shared log-log plot.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod render;
