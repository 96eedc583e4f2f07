// TeamCal - HR team calendar
// Main entry point for iced application

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Application, Command, Element, Length, Settings as IcedSettings, Theme};
use log::{error, info, warn};

use teamcal::api::HttpCalendarApi;
use teamcal::command_handlers::CalendarHandlers;
use teamcal::config::{validate_config, AppConfig};
use teamcal::messages::Message;
use teamcal::ui::calendar::{view_day_agenda, view_filters, view_grid, view_toolbar};
use teamcal::ui::dialogs::view_dialog;
use teamcal::ui::styles::{BackgroundStyle, BannerStyle, GhostButtonStyle, PanelStyle};
use teamcal::ui_state::{FetchOrigin, MutationKind, UiState, EVENTS_FETCH_FAILED};
use teamcal::utils::logging::{init_logging, log_error_with_context};

const DEPARTMENTS_FETCH_FAILED: &str = "Failed to load departments";

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct TeamCalendarApp {
    // Command handlers for async operations
    handlers: CalendarHandlers,

    // UI state management
    ui_state: UiState,
}

impl TeamCalendarApp {
    /// Starts a fetch for whatever the UI state currently shows.
    fn fetch_events(&mut self, origin: FetchOrigin) -> Command<Message> {
        let ticket = self.ui_state.begin_fetch(origin);
        let handlers = self.handlers.clone();
        Command::perform(
            async move {
                let result = handlers.load_events(ticket.query).await;
                (ticket.seq, ticket.origin, result)
            },
            |(seq, origin, result)| {
                Message::EventsLoaded(seq, origin, result.map_err(|_| EVENTS_FETCH_FAILED.to_string()))
            },
        )
    }

    fn fetch_departments(&self) -> Command<Message> {
        let handlers = self.handlers.clone();
        Command::perform(async move { handlers.load_departments().await }, |result| {
            Message::DepartmentsLoaded(result.map_err(|e| e.user_message(DEPARTMENTS_FETCH_FAILED)))
        })
    }

    fn view_notification(&self) -> Option<Element<'_, Message>> {
        let notification = self.ui_state.notification.as_ref()?;
        Some(
            container(
                row![
                    text(&notification.message).size(14),
                    iced::widget::horizontal_space(),
                    button(text("×").size(16))
                        .on_press(Message::DismissNotification)
                        .style(iced::theme::Button::Custom(Box::new(GhostButtonStyle))),
                ]
                .align_items(Alignment::Center),
            )
            .padding([6, 12])
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(BannerStyle(notification.kind))))
            .into(),
        )
    }
}

impl Application for TeamCalendarApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = (CalendarHandlers, AppConfig);

    fn new((handlers, config): Self::Flags) -> (Self, Command<Message>) {
        let mut app = TeamCalendarApp {
            handlers,
            ui_state: UiState::new(today(), &config),
        };

        // Departments and the first page of events load in parallel
        let startup = Command::batch([
            app.fetch_departments(),
            app.fetch_events(FetchOrigin::Startup),
        ]);
        (app, startup)
    }

    fn title(&self) -> String {
        "Team Calendar".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            // ===== Navigation =====
            Message::PreviousPeriod => {
                self.ui_state.previous_period();
                self.fetch_events(FetchOrigin::UserAction)
            }
            Message::NextPeriod => {
                self.ui_state.next_period();
                self.fetch_events(FetchOrigin::UserAction)
            }
            Message::Today => {
                self.ui_state.go_to_today(today());
                self.fetch_events(FetchOrigin::UserAction)
            }
            Message::SetViewMode(mode) => {
                if mode == self.ui_state.view_mode {
                    return Command::none();
                }
                self.ui_state.set_view_mode(mode);
                self.fetch_events(FetchOrigin::UserAction)
            }

            // ===== Filters =====
            Message::ToggleLeaves(include) => {
                self.ui_state.set_include_leaves(include);
                self.fetch_events(FetchOrigin::UserAction)
            }
            Message::ToggleBirthdays(include) => {
                self.ui_state.set_include_birthdays(include);
                self.fetch_events(FetchOrigin::UserAction)
            }
            Message::ToggleAnniversaries(include) => {
                self.ui_state.set_include_anniversaries(include);
                self.fetch_events(FetchOrigin::UserAction)
            }
            Message::DepartmentSelected(option) => {
                self.ui_state.set_department(option.id);
                self.fetch_events(FetchOrigin::UserAction)
            }

            // ===== Selection and dialogs =====
            Message::DaySelected(date) => {
                self.ui_state.select_date(date);
                Command::none()
            }
            Message::EventSelected(id) => {
                self.ui_state.open_details_by_id(&id);
                Command::none()
            }
            Message::OpenCreate(date) => {
                self.ui_state.open_create(date);
                Command::none()
            }
            Message::EditEvent => {
                if let Err(e) = self.ui_state.open_edit() {
                    warn!("Cannot edit: {}", e);
                }
                Command::none()
            }
            Message::RequestDelete => {
                if let Err(e) = self.ui_state.request_delete() {
                    warn!("Cannot delete: {}", e);
                }
                Command::none()
            }
            Message::CloseDialog => {
                self.ui_state.close_dialog();
                Command::none()
            }
            Message::Form(field) => {
                self.ui_state.update_form(field);
                Command::none()
            }
            Message::DismissNotification => {
                self.ui_state.dismiss_notification();
                Command::none()
            }

            // ===== Mutations =====
            Message::SaveEvent => match self.ui_state.begin_save() {
                Ok(request) => {
                    let kind = request.kind();
                    let handlers = self.handlers.clone();
                    Command::perform(async move { handlers.save_event(request).await }, move |result| {
                        Message::EventSaved(kind, result.map_err(|e| e.user_message(kind.fallback_message())))
                    })
                }
                Err(e) => {
                    warn!("Event not saved: {}", e);
                    Command::none()
                }
            },
            Message::ConfirmDelete => match self.ui_state.begin_delete() {
                Ok(id) => {
                    let handlers = self.handlers.clone();
                    Command::perform(async move { handlers.delete_event(id).await }, |result| {
                        Message::EventDeleted(
                            result.map_err(|e| e.user_message(MutationKind::Delete.fallback_message())),
                        )
                    })
                }
                Err(e) => {
                    warn!("Event not deleted: {}", e);
                    Command::none()
                }
            },
            Message::Respond(status) => match self.ui_state.begin_respond(status) {
                Ok((id, status)) => {
                    let handlers = self.handlers.clone();
                    Command::perform(async move { handlers.respond(id, status).await }, |result| {
                        Message::ResponseRecorded(
                            result.map_err(|e| e.user_message(MutationKind::Respond.fallback_message())),
                        )
                    })
                }
                Err(e) => {
                    warn!("Response not sent: {}", e);
                    Command::none()
                }
            },

            // ===== Async results =====
            Message::DepartmentsLoaded(result) => {
                self.ui_state.set_departments(result);
                Command::none()
            }
            Message::EventsLoaded(seq, origin, result) => {
                self.ui_state.finish_fetch(seq, origin, result);
                Command::none()
            }
            Message::EventSaved(kind, result) => {
                if self.ui_state.finish_mutation(kind, result.map(|_| ())) {
                    self.fetch_events(FetchOrigin::UserAction)
                } else {
                    Command::none()
                }
            }
            Message::EventDeleted(result) => {
                if self.ui_state.finish_mutation(MutationKind::Delete, result) {
                    self.fetch_events(FetchOrigin::UserAction)
                } else {
                    Command::none()
                }
            }
            Message::ResponseRecorded(result) => {
                if self.ui_state.finish_mutation(MutationKind::Respond, result) {
                    self.fetch_events(FetchOrigin::UserAction)
                } else {
                    Command::none()
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let today = today();

        let mut main = column![].spacing(16);
        if let Some(banner) = self.view_notification() {
            main = main.push(banner);
        }
        main = main
            .push(view_toolbar(&self.ui_state))
            .push(view_filters(&self.ui_state))
            .push(view_grid(&self.ui_state, today));

        let side = view_dialog(&self.ui_state).unwrap_or_else(|| view_day_agenda(&self.ui_state));

        let panel = container(side)
            .width(340)
            .height(Length::Fill)
            .padding(20)
            .style(iced::theme::Container::Custom(Box::new(PanelStyle)));

        container(row![
            container(main).width(Length::Fill).height(Length::Fill).padding(24),
            panel,
        ])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(BackgroundStyle)))
        .into()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    init_logging();

    info!("Starting Team Calendar");

    let config = match AppConfig::load().and_then(|config| {
        validate_config(&config)?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            let e = anyhow::Error::from(e).context("Invalid configuration");
            log_error_with_context(&e, "startup");
            eprintln!("{:#}", e);
            eprintln!("Set {} or edit the config file and try again.", teamcal::config::CONFIG_PATH_ENV);
            std::process::exit(1);
        }
    };

    let api = match HttpCalendarApi::new(&config) {
        Ok(api) => api,
        Err(e) => {
            error!("Failed to initialize API client: {}", e);
            eprintln!("Failed to initialize API client: {}", e);
            std::process::exit(1);
        }
    };
    let handlers = CalendarHandlers::new(Arc::new(api));

    TeamCalendarApp::run(IcedSettings {
        window: iced::window::Settings {
            size: iced::Size::new(1280.0, 820.0),
            resizable: true,
            ..Default::default()
        },
        default_text_size: iced::Pixels(15.0),
        ..IcedSettings::with_flags((handlers, config))
    })
}
