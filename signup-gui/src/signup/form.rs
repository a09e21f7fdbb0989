use email_address::EmailAddress;
use iced::widget::text_input;
use signup_ui::component::form::{self, is_digits_within};

use crate::services::signup::{SignupRequest, YesNo};

/// Maximum number of digits of a whatsapp number.
pub const WHATSAPP_MAX_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    BranchName,
    ContactName,
    Whatsapp,
    Prefix,
    Email,
}

impl Field {
    /// Fields in display order.
    pub const ALL: [Field; 5] = [
        Field::BranchName,
        Field::ContactName,
        Field::Whatsapp,
        Field::Prefix,
        Field::Email,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::BranchName => "Company Name *",
            Self::ContactName => "Contact Person Name *",
            Self::Whatsapp => "WhatsApp Number *",
            Self::Prefix => "Company Short Name *",
            Self::Email => "Email Address *",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::BranchName => "Enter your company name",
            Self::ContactName => "Enter contact person name",
            Self::Whatsapp => "Enter your WhatsApp number",
            Self::Prefix => "Enter short name for your company",
            Self::Email => "Enter your email address",
        }
    }

    pub fn warning(&self) -> &'static str {
        match self {
            Self::BranchName => "Company name is required",
            Self::ContactName => "Contact person name is required",
            Self::Whatsapp => "WhatsApp number is required",
            Self::Prefix => "Company short name is required",
            Self::Email => "Please enter a valid email address",
        }
    }

    /// Widget id of the field input.
    pub fn input_id(&self) -> text_input::Id {
        text_input::Id::new(match self {
            Self::BranchName => "branch_name",
            Self::ContactName => "branch_contact_name",
            Self::Whatsapp => "branch_whatsapp",
            Self::Prefix => "branch_prefix",
            Self::Email => "branch_email",
        })
    }
}

/// Choice offered by the unit type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitChoice {
    Box,
    Piece,
    Both,
}

impl UnitChoice {
    pub const ALL: [UnitChoice; 3] = [UnitChoice::Box, UnitChoice::Piece, UnitChoice::Both];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Box => "Box only",
            Self::Piece => "Piece only",
            Self::Both => "Both (Box and Piece)",
        }
    }
}

/// How the branch keeps its stock in quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSelection {
    #[default]
    None,
    BoxOnly,
    PieceOnly,
    Both,
}

impl UnitSelection {
    pub fn choice(&self) -> Option<UnitChoice> {
        match self {
            Self::None => None,
            Self::BoxOnly => Some(UnitChoice::Box),
            Self::PieceOnly => Some(UnitChoice::Piece),
            Self::Both => Some(UnitChoice::Both),
        }
    }

    /// Box unit flag.
    pub fn d_unit(&self) -> YesNo {
        matches!(self, Self::BoxOnly | Self::Both).into()
    }

    /// Piece unit flag.
    pub fn s_unit(&self) -> YesNo {
        matches!(self, Self::PieceOnly | Self::Both).into()
    }
}

impl From<UnitChoice> for UnitSelection {
    fn from(choice: UnitChoice) -> Self {
        match choice {
            UnitChoice::Box => Self::BoxOnly,
            UnitChoice::Piece => Self::PieceOnly,
            UnitChoice::Both => Self::Both,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Fields left empty or malformed, in display order.
    MissingFields(Vec<Field>),
    NoUnitSelected,
    /// A request is already in flight.
    InFlight,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignupForm {
    pub branch_name: form::Value<String>,
    pub branch_contact_name: form::Value<String>,
    pub branch_whatsapp: form::Value<String>,
    pub branch_prefix: form::Value<String>,
    pub branch_email: form::Value<String>,
    pub unit: UnitSelection,
}

impl SignupForm {
    pub fn value(&self, field: Field) -> &form::Value<String> {
        match field {
            Field::BranchName => &self.branch_name,
            Field::ContactName => &self.branch_contact_name,
            Field::Whatsapp => &self.branch_whatsapp,
            Field::Prefix => &self.branch_prefix,
            Field::Email => &self.branch_email,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut form::Value<String> {
        match field {
            Field::BranchName => &mut self.branch_name,
            Field::ContactName => &mut self.branch_contact_name,
            Field::Whatsapp => &mut self.branch_whatsapp,
            Field::Prefix => &mut self.branch_prefix,
            Field::Email => &mut self.branch_email,
        }
    }

    /// Returns the form with `field` set to `value`, every other field untouched.
    /// A whatsapp value that is not made of at most 10 digits is discarded.
    pub fn with_field(mut self, field: Field, value: String) -> Self {
        if field == Field::Whatsapp && !is_digits_within(&value, WHATSAPP_MAX_LEN) {
            return self;
        }
        let entry = self.value_mut(field);
        entry.value = value;
        entry.valid = true;
        self
    }

    pub fn select_unit(mut self, choice: UnitChoice) -> Self {
        self.unit = choice.into();
        self
    }

    fn is_field_valid(&self, field: Field) -> bool {
        let value = self.value(field).value.trim();
        match field {
            Field::Email => EmailAddress::is_valid(value),
            Field::Whatsapp => !value.is_empty() && is_digits_within(value, WHATSAPP_MAX_LEN),
            _ => !value.is_empty(),
        }
    }

    /// Marks every invalid field and builds the request if the form can be submitted.
    pub fn validate(&mut self) -> Result<SignupRequest, SubmitError> {
        let mut missing = Vec::new();
        for field in Field::ALL {
            let valid = self.is_field_valid(field);
            self.value_mut(field).valid = valid;
            if !valid {
                missing.push(field);
            }
        }
        if !missing.is_empty() {
            return Err(SubmitError::MissingFields(missing));
        }

        if self.unit == UnitSelection::None {
            return Err(SubmitError::NoUnitSelected);
        }

        Ok(SignupRequest {
            branch_name: self.branch_name.value.trim().to_string(),
            branch_contact_name: self.branch_contact_name.value.trim().to_string(),
            branch_whatsapp: self.branch_whatsapp.value.clone(),
            branch_prefix: self.branch_prefix.value.trim().to_string(),
            branch_email: self.branch_email.value.trim().to_string(),
            branch_d_unit: self.unit.d_unit(),
            branch_s_unit: self.unit.s_unit(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> SignupForm {
        SignupForm::default()
            .with_field(Field::BranchName, "Acme Traders".to_string())
            .with_field(Field::ContactName, "Jane Doe".to_string())
            .with_field(Field::Whatsapp, "9876543210".to_string())
            .with_field(Field::Prefix, "ACME".to_string())
            .with_field(Field::Email, "jane@acme.test".to_string())
    }

    #[test]
    fn with_field_only_touches_one_field() {
        let form = filled_form();
        let edited = form.clone().with_field(Field::Prefix, "ACM".to_string());
        assert_eq!(edited.branch_prefix.value, "ACM");
        assert_eq!(edited.branch_name, form.branch_name);
        assert_eq!(edited.branch_contact_name, form.branch_contact_name);
        assert_eq!(edited.branch_whatsapp, form.branch_whatsapp);
        assert_eq!(edited.branch_email, form.branch_email);
        assert_eq!(edited.unit, form.unit);
    }

    #[test]
    fn whatsapp_keeps_only_short_digit_strings() {
        let form = SignupForm::default().with_field(Field::Whatsapp, "12345".to_string());
        assert_eq!(form.branch_whatsapp.value, "12345");

        let form = form.with_field(Field::Whatsapp, "12345a".to_string());
        assert_eq!(form.branch_whatsapp.value, "12345");

        let form = form.with_field(Field::Whatsapp, "12345678901".to_string());
        assert_eq!(form.branch_whatsapp.value, "12345");

        let form = form.with_field(Field::Whatsapp, "1234567890".to_string());
        assert_eq!(form.branch_whatsapp.value, "1234567890");

        // Clearing the field is allowed.
        let form = form.with_field(Field::Whatsapp, String::new());
        assert_eq!(form.branch_whatsapp.value, "");
    }

    #[test]
    fn unit_flags() {
        let cases = [
            (UnitSelection::None, YesNo::No, YesNo::No),
            (UnitSelection::BoxOnly, YesNo::Yes, YesNo::No),
            (UnitSelection::PieceOnly, YesNo::No, YesNo::Yes),
            (UnitSelection::Both, YesNo::Yes, YesNo::Yes),
        ];
        for (unit, d, s) in cases {
            assert_eq!(unit.d_unit(), d, "{:?}", unit);
            assert_eq!(unit.s_unit(), s, "{:?}", unit);
        }

        // Selecting a radio replaces the previous choice.
        let form = SignupForm::default()
            .select_unit(UnitChoice::Box)
            .select_unit(UnitChoice::Piece);
        assert_eq!(form.unit, UnitSelection::PieceOnly);
        assert_eq!(form.unit.choice(), Some(UnitChoice::Piece));
        assert_eq!(UnitSelection::None.choice(), None);
    }

    #[test]
    fn validate_marks_missing_fields() {
        let mut form = SignupForm::default()
            .with_field(Field::BranchName, "Acme".to_string())
            .with_field(Field::ContactName, "   ".to_string())
            .with_field(Field::Email, "not-an-email".to_string())
            .select_unit(UnitChoice::Both);
        assert_eq!(
            form.validate(),
            Err(SubmitError::MissingFields(vec![
                Field::ContactName,
                Field::Whatsapp,
                Field::Prefix,
                Field::Email,
            ]))
        );
        assert!(form.branch_name.valid);
        assert!(!form.branch_contact_name.valid);
        assert!(!form.branch_email.valid);

        // Editing a field clears its warning.
        let form = form.with_field(Field::ContactName, "Jane".to_string());
        assert!(form.branch_contact_name.valid);
        assert!(!form.branch_prefix.valid);
    }

    #[test]
    fn field_wording() {
        let labels: Vec<_> = Field::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            [
                "Company Name *",
                "Contact Person Name *",
                "WhatsApp Number *",
                "Company Short Name *",
                "Email Address *",
            ]
        );
        let placeholders: Vec<_> = Field::ALL.iter().map(|f| f.placeholder()).collect();
        assert_eq!(
            placeholders,
            [
                "Enter your company name",
                "Enter contact person name",
                "Enter your WhatsApp number",
                "Enter short name for your company",
                "Enter your email address",
            ]
        );
    }

    #[test]
    fn email_accepts_local_hosts() {
        let email_valid = |email: &str| {
            let mut form = filled_form()
                .with_field(Field::Email, email.to_string())
                .select_unit(UnitChoice::Both);
            form.validate().is_ok()
        };
        assert!(email_valid("jane@acme.test"));
        assert!(email_valid("jane@localhost"));
        assert!(email_valid(" jane@localhost "));
        assert!(!email_valid("not-an-email"));
        assert!(!email_valid("jane@"));
        assert!(!email_valid("@acme.test"));
    }

    #[test]
    fn validate_requires_a_unit() {
        let mut form = filled_form();
        assert_eq!(form.validate(), Err(SubmitError::NoUnitSelected));
        assert!(Field::ALL.iter().all(|f| form.value(*f).valid));
    }

    #[test]
    fn validate_builds_request() {
        let mut form = filled_form()
            .with_field(Field::BranchName, "  Acme Traders ".to_string())
            .select_unit(UnitChoice::Box);
        let request = form.validate().unwrap();
        assert_eq!(
            request,
            SignupRequest {
                branch_name: "Acme Traders".to_string(),
                branch_contact_name: "Jane Doe".to_string(),
                branch_whatsapp: "9876543210".to_string(),
                branch_prefix: "ACME".to_string(),
                branch_email: "jane@acme.test".to_string(),
                branch_d_unit: YesNo::Yes,
                branch_s_unit: YesNo::No,
            }
        );
    }
}
