pub mod heartbeat;

pub use heartbeat::HeartbeatUseCase;
