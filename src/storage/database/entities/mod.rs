/// Category entity module
pub mod category;
/// Order entity module
pub mod order;
/// Order item entity module
pub mod order_item;
/// Password recovery token entity module
pub mod password_recover;
/// Payment entity module
pub mod payment;
/// Product entity module
pub mod product;
/// Product/category junction entity module
pub mod product_category;
/// Role entity module
pub mod role;
/// User entity module
pub mod user;
/// User/role junction entity module
pub mod user_role;

pub use category::Entity as Category;
pub use order::Entity as Order;
pub use order_item::Entity as OrderItem;
pub use password_recover::Entity as PasswordRecover;
pub use payment::Entity as Payment;
pub use product::Entity as Product;
pub use product_category::Entity as ProductCategory;
pub use role::Entity as Role;
pub use user::Entity as User;
pub use user_role::Entity as UserRole;
