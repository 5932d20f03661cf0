pub mod meeting_point;
