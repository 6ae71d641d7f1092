pub mod allocation_request;
pub mod allocation_result;
pub mod executive_id;
pub mod lakhs;
pub mod team_shape;
pub mod unit_mode;

pub use allocation_request::{AllocationRequest, IncentiveSettings};
pub use allocation_result::{AllocationResult, TierTotals};
pub use executive_id::{ExecutiveId, ManagerId};
pub use lakhs::Lakhs;
pub use team_shape::TeamShape;
pub use unit_mode::UnitMode;
