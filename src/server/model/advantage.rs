/// Raw creation payload assembled by the controller from the multipart
/// form.
///
/// `coins` and `enterprise_id` are kept as text here; coercing them into
/// numbers is a business rule owned by the service layer.
#[derive(Debug, Clone)]
pub struct NewAdvantage {
    /// Offer title
    pub title: String,
    /// Offer description
    pub description: String,
    /// Cost in coins, as submitted
    pub coins: String,
    /// Publishing enterprise identifier, as submitted
    pub enterprise_id: String,
    /// Uploaded image bytes, owned for the duration of the create call
    pub image: Vec<u8>,
}
