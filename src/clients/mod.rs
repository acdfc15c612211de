pub mod notification;
pub mod rbmq;
