//! Core library exports for the Scriptorium service.
//!
//! This crate exposes the domain, models, repositories, forms, routes and
//! service layers used by the Scriptorium content API.

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
