use iced::{
    widget::{radio, Space},
    Alignment, Length,
};

use signup_ui::{
    component::{button, card, form::Form, text::*},
    theme,
    widget::*,
};

use super::{
    form::{Field, SignupForm, UnitChoice, WHATSAPP_MAX_LEN},
    ViewMessage,
};

const SUBMIT_LABEL: &str = "Start Free Trial";

pub fn signup_view<'a>(
    company_name: &'a str,
    form: &'a SignupForm,
    loading_message: Option<&'static str>,
) -> Element<'a, ViewMessage> {
    Container::new(
        card(
            Row::new()
                .spacing(20)
                .push(trial_panel())
                .push(form_panel(company_name, form, loading_message)),
        )
        .padding(0)
        .max_width(1000.0),
    )
    .padding(40)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(theme::container::background)
    .into()
}

fn trial_panel<'a>() -> Element<'a, ViewMessage> {
    Container::new(
        Column::new()
            .spacing(10)
            .align_x(Alignment::Center)
            .push(h2("15-Day Free Trial"))
            .push(p1_regular("Get full access to all features")),
    )
    .padding(40)
    .center_x(Length::FillPortion(2))
    .center_y(Length::Fill)
    .style(theme::card::highlight)
    .into()
}

fn form_panel<'a>(
    company_name: &'a str,
    form: &'a SignupForm,
    loading_message: Option<&'static str>,
) -> Element<'a, ViewMessage> {
    let header = Column::new()
        .spacing(5)
        .push(h3(company_name))
        .push(p2_regular("Start your free trial").style(theme::text::secondary));

    let fields = Field::ALL
        .iter()
        .fold(Column::new().spacing(15), |col, field| {
            col.push(input(form, *field))
        });

    let submit = button::primary(loading_message.unwrap_or(SUBMIT_LABEL))
        .width(Length::Fill)
        .padding(10)
        .on_press_maybe(loading_message.is_none().then_some(ViewMessage::Submit));

    Container::new(
        Column::new()
            .spacing(20)
            .push(header)
            .push(fields)
            .push(unit_selector(form))
            .push(submit)
            .push(
                Row::new()
                    .push(Space::with_width(Length::Fill))
                    .push(
                        button::link("Already have an account? Sign in")
                            .on_press(ViewMessage::SignIn),
                    )
                    .push(Space::with_width(Length::Fill)),
            ),
    )
    .padding(40)
    .width(Length::FillPortion(3))
    .into()
}

fn input<'a>(form: &'a SignupForm, field: Field) -> Element<'a, ViewMessage> {
    let value = form.value(field);
    let input = match field {
        Field::Whatsapp => Form::new_digits(
            field.placeholder(),
            value,
            WHATSAPP_MAX_LEN,
            |v| ViewMessage::FieldEdited(Field::Whatsapp, v),
        ),
        _ => Form::new(field.placeholder(), value, move |v| {
            ViewMessage::FieldEdited(field, v)
        }),
    };
    Column::new()
        .spacing(5)
        .push(p2_medium(field.label()).style(theme::text::primary))
        .push(
            input
                .warning(field.warning())
                .on_submit(ViewMessage::Submit)
                .id(field.input_id())
                .padding(10)
                .size(P1_SIZE),
        )
        .into()
}

fn unit_selector<'a>(form: &'a SignupForm) -> Element<'a, ViewMessage> {
    let selected = form.unit.choice();
    Column::new()
        .spacing(10)
        .push(p2_medium("Unit Type *").style(theme::text::primary))
        .push(
            UnitChoice::ALL
                .iter()
                .fold(Row::new().spacing(20), |row, choice| {
                    row.push(
                        radio(
                            choice.label(),
                            *choice,
                            selected,
                            ViewMessage::UnitSelected,
                        )
                        .size(16.0)
                        .text_size(P2_SIZE),
                    )
                }),
        )
        .push(
            caption("Select how you want to maintain your stock in quantity")
                .style(theme::text::secondary),
        )
        .into()
}
