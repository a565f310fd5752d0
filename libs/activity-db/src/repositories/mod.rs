pub mod activity_repo;
