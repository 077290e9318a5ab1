//! Table definitions, applied in order by `SqliteStore::init_schema`.

pub const CREATE_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
)";

/// One posting per (company_name, domain); slots can never drop below zero.
pub const CREATE_INTERNSHIPS: &str = "CREATE TABLE IF NOT EXISTS internships (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    company_name TEXT NOT NULL,
    domain TEXT NOT NULL,
    slots INTEGER NOT NULL CHECK (slots >= 0),
    UNIQUE (company_name, domain)
)";

pub const CREATE_APPLICATIONS: &str = "CREATE TABLE IF NOT EXISTS applications (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    internship_id INTEGER NOT NULL REFERENCES internships (id),
    student_name TEXT NOT NULL,
    email TEXT NOT NULL,
    company_name TEXT NOT NULL,
    domain TEXT NOT NULL,
    applied_at TEXT NOT NULL
)";

pub const STATEMENTS: [&str; 3] = [CREATE_USERS, CREATE_INTERNSHIPS, CREATE_APPLICATIONS];
