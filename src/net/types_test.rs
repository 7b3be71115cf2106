use super::*;

#[test]
fn user_deserializes_string_id() {
    let user: User = serde_json::from_str(
        r#"{"id":"u1","name":"Alice","email":"a@x.com","password":"p","role":"buyer"}"#,
    )
    .unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.role, "buyer");
}

#[test]
fn user_deserializes_numeric_id_as_string() {
    let user: User = serde_json::from_str(
        r#"{"id":7,"name":"Bob","email":"b@x.com","password":"p","role":"seller"}"#,
    )
    .unwrap();
    assert_eq!(user.id, "7");
}

#[test]
fn user_rejects_non_scalar_id() {
    let result = serde_json::from_str::<User>(
        r#"{"id":{"inner":1},"name":"Bob","email":"b@x.com","password":"p","role":"seller"}"#,
    );
    assert!(result.is_err());
}

#[test]
fn new_user_serializes_all_fields() {
    let payload = NewUser {
        name: "Alice".to_owned(),
        email: "a@x.com".to_owned(),
        password: "p".to_owned(),
        role: "buyer".to_owned(),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"name":"Alice","email":"a@x.com","password":"p","role":"buyer"})
    );
}
