//! Form definitions for the application's screens
//!
//! One constructor per page mount. The engine is generic; these pin down
//! the concrete field names and rules the todo application uses, so every
//! screen builds its form the same way.

use crate::forms::{Form, FormField, Validator};

/// Login screen: email and password
pub fn login_form() -> Form {
    Form::new(vec![
        FormField::validated("email", "", vec![Validator::Required, Validator::Email]),
        FormField::validated("password", "", vec![Validator::Required]),
    ])
}

/// Signup screen: name fields are optional, passwords must match
pub fn signup_form() -> Form {
    Form::new(vec![
        FormField::new("firstName", ""),
        FormField::new("lastName", ""),
        FormField::validated("email", "", vec![Validator::Required, Validator::Email]),
        FormField::validated("password", "", vec![Validator::Required]),
        FormField::matching(
            "confirmPassword",
            "",
            vec![Validator::Required, Validator::MatchesField],
            "password",
        ),
    ])
}

/// Forgot-password screen: just the account email
pub fn forgot_password_form() -> Form {
    Form::new(vec![FormField::validated(
        "email",
        "",
        vec![Validator::Required, Validator::Email],
    )])
}

/// Profile screen, account section: seeded from the current profile
pub fn account_info_form(first_name: &str, last_name: &str, email: &str) -> Form {
    Form::new(vec![
        FormField::new("firstName", first_name),
        FormField::new("lastName", last_name),
        FormField::validated("email", email, vec![Validator::Required, Validator::Email]),
    ])
}

/// Profile screen, password section: new password must be confirmed
pub fn change_password_form() -> Form {
    Form::new(vec![
        FormField::validated("currentPassword", "", vec![Validator::Required]),
        FormField::validated("newPassword", "", vec![Validator::Required]),
        FormField::matching(
            "confirmPassword",
            "",
            vec![Validator::Required, Validator::MatchesField],
            "newPassword",
        ),
    ])
}

/// Todo screen: the add-item form
pub fn add_todo_form() -> Form {
    Form::new(vec![FormField::validated(
        "todo",
        "",
        vec![Validator::Required],
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(form: &Form) -> Vec<&str> {
        form.fields().map(FormField::name).collect()
    }

    mod shapes {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_login_form_fields() -> anyhow::Result<()> {
            let form = login_form();
            assert_eq!(names(&form), ["email", "password"]);
            assert_eq!(
                form.get_field("email")?.validators(),
                [Validator::Required, Validator::Email]
            );
            assert_eq!(
                form.get_field("password")?.validators(),
                [Validator::Required]
            );
            Ok(())
        }

        #[test]
        fn test_signup_form_fields() -> anyhow::Result<()> {
            let form = signup_form();
            assert_eq!(
                names(&form),
                ["firstName", "lastName", "email", "password", "confirmPassword"]
            );
            assert!(form.get_field("firstName")?.validators().is_empty());
            assert_eq!(
                form.get_field("confirmPassword")?.match_target(),
                Some("password")
            );
            Ok(())
        }

        #[test]
        fn test_forgot_password_form_fields() {
            let form = forgot_password_form();
            assert_eq!(names(&form), ["email"]);
        }

        #[test]
        fn test_account_info_form_is_seeded() -> anyhow::Result<()> {
            let form = account_info_form("Ada", "Lovelace", "ada@example.com");
            assert_eq!(form.get_field("firstName")?.value(), "Ada");
            assert_eq!(form.get_field("lastName")?.value(), "Lovelace");
            assert_eq!(form.get_field("email")?.value(), "ada@example.com");
            // Seeded values do not count as changes
            assert!(!form.changed());
            Ok(())
        }

        #[test]
        fn test_change_password_confirm_matches_new_password() -> anyhow::Result<()> {
            let form = change_password_form();
            assert_eq!(
                names(&form),
                ["currentPassword", "newPassword", "confirmPassword"]
            );
            assert_eq!(
                form.get_field("confirmPassword")?.match_target(),
                Some("newPassword")
            );
            Ok(())
        }

        #[test]
        fn test_add_todo_form_fields() -> anyhow::Result<()> {
            let form = add_todo_form();
            assert_eq!(names(&form), ["todo"]);
            assert_eq!(form.get_field("todo")?.validators(), [Validator::Required]);
            Ok(())
        }
    }

    mod flows {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_signup_happy_path() -> anyhow::Result<()> {
            let mut form = signup_form();
            form.set_field_value("email", "ada@example.com")?;
            form.set_field_touched("email", true)?;
            form.set_field_value("password", "abc123")?;
            form.set_field_value("confirmPassword", "abc123")?;
            form.set_field_touched("confirmPassword", true)?;

            form.submit()?;
            assert!(form.valid());
            Ok(())
        }

        #[test]
        fn test_signup_blank_submit_flags_required_fields() -> anyhow::Result<()> {
            let mut form = signup_form();
            form.submit()?;

            assert!(!form.valid());
            for name in ["email", "password", "confirmPassword"] {
                assert_eq!(form.get_field(name)?.error(), Some(Validator::Required));
            }
            // Optional name fields stay valid
            assert_eq!(form.get_field("firstName")?.error(), None);
            assert_eq!(form.get_field("lastName")?.error(), None);
            Ok(())
        }

        #[test]
        fn test_signup_password_mismatch() -> anyhow::Result<()> {
            let mut form = signup_form();
            form.set_field_value("email", "ada@example.com")?;
            form.set_field_value("password", "abc123")?;
            form.set_field_value("confirmPassword", "abc124")?;
            form.set_field_touched("confirmPassword", true)?;

            assert_eq!(
                form.get_field("confirmPassword")?.error(),
                Some(Validator::MatchesField)
            );

            form.set_field_value("confirmPassword", "abc123")?;
            assert_eq!(form.get_field("confirmPassword")?.error(), None);
            Ok(())
        }

        #[test]
        fn test_change_password_flow() -> anyhow::Result<()> {
            let mut form = change_password_form();
            form.set_field_value("currentPassword", "old-secret")?;
            form.set_field_value("newPassword", "new-secret")?;
            form.set_field_value("confirmPassword", "new-secret")?;
            form.set_field_touched("confirmPassword", true)?;

            form.submit()?;
            assert!(form.valid());
            Ok(())
        }

        #[test]
        fn test_add_todo_requires_content_only_on_submit() -> anyhow::Result<()> {
            let mut form = add_todo_form();
            form.set_field_touched("todo", true)?;
            assert!(form.valid());

            form.submit()?;
            assert_eq!(form.get_field("todo")?.error(), Some(Validator::Required));

            form.set_field_value("todo", "buy milk")?;
            assert!(form.valid());

            // Submitting, then clearing for the next item
            form.reset();
            assert!(!form.submitted());
            assert_eq!(form.get_field("todo")?.value(), "");
            Ok(())
        }
    }
}
