pub type ProductId = i64;
pub type BidId = i64;

/// Opaque token identifying a user. Issued by the users service and treated
/// here as both identity and authorization credential.
pub type UserToken = String;
