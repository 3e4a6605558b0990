use uuid::Uuid;

/// An identity record. The token doubles as the user's credential towards the
/// bidding service and is generated here, never supplied by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub token:                   Uuid,
    pub first_name:              String,
    pub last_name:               String,
    pub phone_number:            String,
    pub email:                   String,
    pub street:                  Option<String>,
    pub house_number:            Option<String>,
    pub city:                    Option<String>,
    pub pincode:                 Option<i64>,
    pub additional_address_info: Option<String>,
    pub country:                 Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreateUser {
    pub first_name:              String,
    pub last_name:               String,
    pub phone_number:            String,
    pub email:                   String,
    pub street:                  Option<String>,
    pub house_number:            Option<String>,
    pub city:                    Option<String>,
    pub pincode:                 Option<i64>,
    pub additional_address_info: Option<String>,
    pub country:                 Option<String>,
}
