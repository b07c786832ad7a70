pub mod oslog;
