//! Rule tables for the product routes.

use domain::{
    MSG_AVAILABILITY_INVALID, MSG_ID_INVALID, MSG_NAME_EMPTY, MSG_NAME_NOT_TEXT,
    MSG_PRICE_EMPTY, MSG_PRICE_NOT_NUMERIC, MSG_PRICE_NOT_POSITIVE,
};

use super::{Check, FieldRules, Rule, RouteRules, Source};

const ID: FieldRules = FieldRules {
    field: "id",
    source: Source::Path,
    rules: &[Rule::new(Check::Integer, MSG_ID_INVALID)],
};

const NAME: FieldRules = FieldRules {
    field: "name",
    source: Source::Body,
    rules: &[
        Rule::new(Check::NotEmpty, MSG_NAME_EMPTY),
        Rule::new(Check::Text, MSG_NAME_NOT_TEXT),
    ],
};

const PRICE: FieldRules = FieldRules {
    field: "price",
    source: Source::Body,
    rules: &[
        Rule::new(Check::NotEmpty, MSG_PRICE_EMPTY),
        Rule::new(Check::Numeric, MSG_PRICE_NOT_NUMERIC),
        Rule::new(Check::Positive, MSG_PRICE_NOT_POSITIVE),
    ],
};

const AVAILABILITY: FieldRules = FieldRules {
    field: "availability",
    source: Source::Body,
    rules: &[Rule::new(Check::Boolean, MSG_AVAILABILITY_INVALID)],
};

/// `POST /api/products`
pub const CREATE_PRODUCT: RouteRules = RouteRules(&[NAME, PRICE]);

/// `PUT /api/products/:id`
pub const UPDATE_PRODUCT: RouteRules = RouteRules(&[ID, NAME, PRICE, AVAILABILITY]);

/// `GET`, `PATCH` and `DELETE /api/products/:id`
pub const PRODUCT_ID: RouteRules = RouteRules(&[ID]);
