pub mod link_opener;
pub mod notification;
