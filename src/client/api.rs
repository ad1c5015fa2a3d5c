pub mod bootstrap_admin;
