pub mod consts;
pub mod errors;
pub mod estimate;
pub mod report;

pub use errors::{DeployCostError, DeployCostResult};
pub use estimate::{
    binary_size, estimate_deploy_cost, rent_exempt_lamports,
    DeployCostEstimate, DeployCostParams,
};
pub use report::render_report;
