use super::*;

#[test]
fn users_endpoint_is_the_collection_path() {
    assert_eq!(USERS_ENDPOINT, "/api/users");
}

#[test]
fn directory_error_messages_name_the_failure() {
    assert_eq!(
        DirectoryError::Transport("timeout".to_owned()).to_string(),
        "directory request failed: timeout"
    );
    assert_eq!(DirectoryError::Status(503).to_string(), "directory returned status 503");
    assert_eq!(
        DirectoryError::Unavailable.to_string(),
        "user directory is not available outside the browser"
    );
}

#[test]
fn rest_directory_is_unavailable_without_a_browser() {
    let directory = RestUserDirectory;
    let result = futures::executor::block_on(directory.get_all());
    assert_eq!(result, Err(DirectoryError::Unavailable));

    let payload = NewUser {
        name: "Alice".to_owned(),
        email: "a@x.com".to_owned(),
        password: "p".to_owned(),
        role: "buyer".to_owned(),
    };
    let result = futures::executor::block_on(directory.create(&payload));
    assert_eq!(result, Err(DirectoryError::Unavailable));
}
