use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct DailyMenuParams {
    /// Weekday name such as `Monday` or `mon`. Defaults to the server's current day.
    #[schema(example = "Monday")]
    pub day: Option<String>,
}
