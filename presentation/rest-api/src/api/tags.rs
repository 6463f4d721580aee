use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Auth,
    Categories,
    Products,
    Vouchers,
    Cart,
}
