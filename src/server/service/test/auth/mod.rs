use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::UpdateUserParams,
    service::{auth::AuthService, user::UserService},
    util::{jwt::JwtService, password::hash_password},
};
use entity::user::Role;
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod register;

fn jwt() -> JwtService {
    JwtService::new("test-secret", 60)
}
