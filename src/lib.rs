//! # Trade Desk Backend - REST API Server
//!
//! A REST API backend for trade desk reference data: bid lists, curve points,
//! ratings, rule names, trades and user accounts. Built with
//! [Axum](https://crates.io/crates/axum) for async HTTP handling, backed by
//! PostgreSQL through [sqlx](https://crates.io/crates/sqlx), and documented
//! via [utoipa](https://crates.io/crates/utoipa) with a Swagger UI at
//! `/swagger-ui/`.
//!
//! ## Key Features
//!
//! - **RESTful CRUD**: list, get, create, replace and delete for each of the
//!   six entity types, with uniform status-code mapping.
//!
//! - **Token Authentication**: `POST /api/auth/login` verifies credentials
//!   against bcrypt hashes and issues an HMAC-signed, time-limited bearer
//!   token carrying the caller's name and primary role.
//!
//! - **Role Authorization**: desk endpoints require the User or Admin role;
//!   account management requires Admin. A valid token with the wrong role is
//!   rejected before any business logic runs.
//!
//! - **Request Validation**: payloads are checked field by field before any
//!   persistence attempt; failures name the offending fields in a structured
//!   400 body.
//!
//! - **Structured Logging**: request tracing with `tower-http`; unhandled
//!   errors are logged server-side and surfaced as a fixed 500 message.
//!
//! ## Architecture
//!
//! Each request flows controller → service → repository → store:
//!
//! ```text
//! api/        handlers: request shape, status mapping
//!   └── service/     precondition checks, error translation
//!         └── repository/   SQL per entity
//!               └── db/     pool, row types, migrations, seeding
//! ```
//!
//! ## API Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/auth/login` | Authenticate, receive bearer token |
//! | GET/POST | `/api/bidlist` | List / create bid list entries |
//! | GET/PUT/DELETE | `/api/bidlist/{id}` | Get / replace / delete one entry |
//! | GET/POST | `/api/curvepoints` | List / create curve points |
//! | GET/PUT/DELETE | `/api/curvepoints/{id}` | Get / replace / delete one point |
//! | GET/POST | `/api/ratings` | List / create ratings |
//! | GET/PUT/DELETE | `/api/ratings/{id}` | Get / replace / delete one rating |
//! | GET/POST | `/api/rulename` | List / create rule names |
//! | GET/PUT/DELETE | `/api/rulename/{id}` | Get / replace / delete one rule |
//! | GET/POST | `/api/trades` | List / create trades |
//! | GET/PUT/DELETE | `/api/trades/{id}` | Get / replace / delete one trade |
//! | GET/POST | `/api/users` | List / create accounts (Admin) |
//! | GET/PUT/DELETE | `/api/users/{id}` | Get / replace / delete one account (Admin) |
//!
//! ## Example Usage
//!
//! ```bash
//! # Login
//! curl -X POST http://localhost:8080/api/auth/login \
//!   -H "Content-Type: application/json" \
//!   -d '{"Login": "admin", "Password": "Admin123!"}'
//!
//! # Create a rating with the returned token
//! curl -X POST http://localhost:8080/api/ratings \
//!   -H "Content-Type: application/json" \
//!   -H "Authorization: Bearer <jwt>" \
//!   -d '{"MoodysRating": "A1", "SandPRating": "A+", "FitchRating": "A", "OrderNumber": 1}'
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
pub mod state;
