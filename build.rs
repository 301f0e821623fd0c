//! Build script for voluntrack-server
//!
//! Migrations are embedded with `sqlx::migrate!`, so a new or edited migration
//! file has to trigger a rebuild.

fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
