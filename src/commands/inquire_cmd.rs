use crate::commands::base_commands::Commands;
use crate::commands::{CommandError, parse_date_arg, resolve_today};
use crate::domain::availability::{BlockReason, BookingRules};
use crate::domain::inquiry::{InquiryForm, InquiryPayload};
use crate::domain::locale::Locale;
use crate::domain::season::CalendarDate;
use crate::domain::selection::{ConfirmedStay, SelectionError, SelectionState};
use crate::services::inquiry_client::{RelayClient, submit_inquiry};
use crate::services::site_config_yaml::load_site_config;

pub async fn inquire_command(cmd: Commands, config_path: Option<&str>) -> Result<(), CommandError> {
    if let Commands::Inquire {
        name,
        email,
        phone,
        message,
        check_in,
        check_out,
        today,
        locale,
        endpoint,
    } = cmd
    {
        let locale: Locale = locale.parse()?;
        let today = resolve_today(today.as_deref())?;
        let config = load_site_config(config_path)?;
        let rules = config.booking_rules();

        let check_in = check_in.as_deref().map(parse_date_arg).transpose()?;
        let check_out = check_out.as_deref().map(parse_date_arg).transpose()?;
        let stay = selected_stay(&rules, today, check_in, check_out)?;

        let form = InquiryForm {
            name,
            email,
            phone,
            message,
        };
        let payload = InquiryPayload::new(form, stay.as_ref(), locale)?;

        let mut endpoints = config.inquiry;
        if let Some(endpoint) = endpoint {
            endpoints.endpoint = endpoint;
        }
        let client = RelayClient::from_env(endpoints).map_err(|source| CommandError::Delivery {
            message: locale.inquiry_failed(),
            source,
        })?;

        submit_inquiry(&client, &payload)
            .await
            .map_err(|source| CommandError::Delivery {
                message: locale.inquiry_failed(),
                source,
            })?;

        println!("{}", locale.inquiry_sent());
    }
    Ok(())
}

/// Stay to attach to the inquiry. An inquiry without dates is fine, a
/// check-out without a check-in is not.
fn selected_stay(
    rules: &BookingRules,
    today: CalendarDate,
    check_in: Option<CalendarDate>,
    check_out: Option<CalendarDate>,
) -> Result<Option<ConfirmedStay>, SelectionError> {
    match (check_in, check_out) {
        (Some(check_in), check_out) => confirm_stay(rules, today, check_in, check_out).map(Some),
        (None, Some(_)) => Err(SelectionError::MissingCheckIn),
        (None, None) => Ok(None),
    }
}

fn confirm_stay(
    rules: &BookingRules,
    today: CalendarDate,
    check_in: CalendarDate,
    check_out: Option<CalendarDate>,
) -> Result<ConfirmedStay, SelectionError> {
    if rules.check_in_block_reason(today, check_in) == Some(BlockReason::Past) {
        return Err(SelectionError::CheckInUnavailable(check_in));
    }

    let mut selection = SelectionState::new();
    let normalized = selection.pick_check_in(&rules.seasons, check_in);
    if normalized != check_in {
        tracing::info!(%check_in, %normalized, "moved winter check-in to Saturday");
    }

    if let Some(check_out) = check_out {
        if selection.is_winter() {
            if selection.check_out() != Some(check_out) {
                return Err(SelectionError::CheckOutFixed);
            }
        } else {
            selection.pick_check_out(check_out)?;
        }
    }

    selection.confirm(rules, today)
}
