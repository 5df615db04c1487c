pub mod answer;
pub mod question;
pub mod recommendation;
pub mod record;
pub mod response;
