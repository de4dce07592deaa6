use crate::cart::CartStore;
use crate::clipboard::ClipboardSink;
use crate::host::HostUser;
use crate::ui::cart::{CartScreenIntent, CartScreenReducer, CartScreenState};
use crate::ui::fetch::FetchIntent;
use crate::ui::game::{GameIntent, GameReducer, GameState, GameStats};
use crate::ui::mvi::Reducer;
use crate::ui::news::{NewsIntent, NewsReducer, NewsState};
use crate::ui::profile::{ProfileIntent, ProfileReducer, ProfileState};
use crate::ui::referrals::{ReferralsIntent, ReferralsReducer, ReferralsState};
use crate::ui::shop::{ShopIntent, ShopReducer, ShopState};
use crate::ui::worker::{ApiCommand, ApiCommandSender, ApiEvent};
use std::time::{Duration, Instant};

/// How long a notice stays in the footer.
const NOTICE_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tab {
    News,
    Profile,
    Game,
    Referrals,
    Shop,
    Cart,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::News,
        Tab::Profile,
        Tab::Game,
        Tab::Referrals,
        Tab::Shop,
        Tab::Cart,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::News => "News",
            Tab::Profile => "Profile",
            Tab::Game => "Game",
            Tab::Referrals => "Referrals",
            Tab::Shop => "Shop",
            Tab::Cart => "Cart",
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
    }

    /// Tab for a 1-based number key.
    pub fn from_number(number: usize) -> Option<Tab> {
        number.checked_sub(1).and_then(|idx| Tab::ALL.get(idx).copied())
    }

    fn offset(self, step: isize) -> Tab {
        let len = Tab::ALL.len() as isize;
        let next = (self.index() as isize + step).rem_euclid(len);
        Tab::ALL[next as usize]
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Clone, Debug)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    shown_at: Instant,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Session-wide UI state.
///
/// Owns the cart for the whole session; shop and cart screens reach it only
/// through this type.
pub struct App {
    should_quit: bool,
    active: Tab,
    host_user: Option<HostUser>,
    cart: CartStore,
    news: NewsState,
    profile: ProfileState,
    game: GameState,
    referrals: ReferralsState,
    shop: ShopState,
    cart_screen: CartScreenState,
    next_generation: u64,
    command_sender: Option<ApiCommandSender>,
    notice: Option<Notice>,
}

impl App {
    pub fn new(host_user: Option<HostUser>) -> Self {
        Self {
            should_quit: false,
            active: Tab::News,
            host_user,
            cart: CartStore::new(),
            news: NewsState::default(),
            profile: ProfileState::default(),
            game: GameState::default(),
            referrals: ReferralsState::default(),
            shop: ShopState::default(),
            cart_screen: CartScreenState::default(),
            next_generation: 0,
            command_sender: None,
            notice: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: ApiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn active_tab(&self) -> Tab {
        self.active
    }

    pub fn host_user(&self) -> Option<&HostUser> {
        self.host_user.as_ref()
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn news(&self) -> &NewsState {
        &self.news
    }

    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn referrals(&self) -> &ReferralsState {
        &self.referrals
    }

    pub fn shop(&self) -> &ShopState {
        &self.shop
    }

    pub fn cart_screen(&self) -> &CartScreenState {
        &self.cart_screen
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn on_tick(&mut self) {
        if self
            .notice
            .as_ref()
            .is_some_and(|notice| notice.shown_at.elapsed() >= NOTICE_TTL)
        {
            self.notice = None;
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Activates `tab`, loading its data if it was never loaded or the last
    /// attempt failed.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active = tab;
        match tab {
            Tab::News if self.news.feed.needs_fetch() => self.fetch_news(),
            Tab::Profile if self.profile.needs_fetch() => self.fetch_profile(),
            Tab::Referrals if self.referrals.summary.needs_fetch() => self.fetch_referrals(),
            Tab::Shop if self.shop.catalog.needs_fetch() => self.fetch_shop(),
            Tab::Game => self.seed_game_from_profile(),
            Tab::Cart => self.clamp_cart_selection(),
            _ => {}
        }
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.active.offset(1));
    }

    pub fn previous_tab(&mut self) {
        self.select_tab(self.active.offset(-1));
    }

    /// Reloads the active tab. Any response still in flight for the old
    /// request is ignored when it arrives.
    pub fn refresh(&mut self) {
        match self.active {
            Tab::News => self.fetch_news(),
            Tab::Profile => self.fetch_profile(),
            Tab::Referrals => self.fetch_referrals(),
            Tab::Shop => self.fetch_shop(),
            Tab::Game | Tab::Cart => {}
        }
    }

    pub fn move_up(&mut self) {
        match self.active {
            Tab::News => {
                dispatch_mvi!(self, news, NewsReducer, NewsIntent::ScrollUp);
            }
            Tab::Shop => {
                dispatch_mvi!(self, shop, ShopReducer, ShopIntent::MoveUp);
            }
            Tab::Cart => {
                let lines = self.cart.len();
                dispatch_mvi!(
                    self,
                    cart_screen,
                    CartScreenReducer,
                    CartScreenIntent::MoveUp { lines }
                );
            }
            _ => {}
        }
    }

    pub fn move_down(&mut self) {
        match self.active {
            Tab::News => {
                dispatch_mvi!(self, news, NewsReducer, NewsIntent::ScrollDown);
            }
            Tab::Shop => {
                dispatch_mvi!(self, shop, ShopReducer, ShopIntent::MoveDown);
            }
            Tab::Cart => {
                let lines = self.cart.len();
                dispatch_mvi!(
                    self,
                    cart_screen,
                    CartScreenReducer,
                    CartScreenIntent::MoveDown { lines }
                );
            }
            _ => {}
        }
    }

    // ========================================================================
    // Screen actions
    // ========================================================================

    /// Sends one click unless a click is already in flight.
    pub fn game_click(&mut self) {
        if self.game.pending {
            return;
        }
        dispatch_mvi!(self, game, GameReducer, GameIntent::Click);
        if let Err(message) = self.send_command(ApiCommand::GameClick) {
            dispatch_mvi!(self, game, GameReducer, GameIntent::Failed { message });
        }
    }

    pub fn copy_referral_link(&mut self, clipboard: &mut dyn ClipboardSink) {
        let Some(link) = self.referrals.referral_link().map(str::to_string) else {
            return;
        };
        match clipboard.set_text(&link) {
            Ok(()) => {
                tracing::debug!("Referral link copied");
                dispatch_mvi!(self, referrals, ReferralsReducer, ReferralsIntent::Copied);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Referral link copy failed");
                dispatch_mvi!(
                    self,
                    referrals,
                    ReferralsReducer,
                    ReferralsIntent::CopyFailed {
                        message: err.to_string()
                    }
                );
            }
        }
    }

    /// Adds the highlighted catalog item to the cart.
    pub fn add_selected_to_cart(&mut self) {
        if self.reject_cart_change() {
            return;
        }
        let Some(item) = self.shop.selected_item().cloned() else {
            return;
        };
        let name = item.name.clone();
        self.cart.add(item);
        self.show_notice(format!("Added {name} to cart"), NoticeLevel::Info);
    }

    pub fn increment_selected_line(&mut self) {
        self.adjust_selected_line(1);
    }

    pub fn decrement_selected_line(&mut self) {
        self.adjust_selected_line(-1);
    }

    pub fn remove_selected_line(&mut self) {
        if self.reject_cart_change() {
            return;
        }
        if let Some(line) = self.cart.lines().get(self.cart_screen.selected) {
            let id = line.item().id;
            self.cart.remove(id);
            self.clamp_cart_selection();
        }
    }

    pub fn toggle_pay_with_bonus(&mut self) {
        dispatch_mvi!(
            self,
            cart_screen,
            CartScreenReducer,
            CartScreenIntent::TogglePayment
        );
    }

    /// Places an order for the current cart. No-op for an empty cart or
    /// while an order request is in flight.
    pub fn submit_order(&mut self) {
        if self.cart.is_empty() || self.cart_screen.pending {
            return;
        }
        let order = self.cart.order_request(self.cart_screen.pay_with_bonus);
        dispatch_mvi!(self, cart_screen, CartScreenReducer, CartScreenIntent::Submit);
        if let Err(message) = self.send_command(ApiCommand::SubmitOrder { order }) {
            dispatch_mvi!(
                self,
                cart_screen,
                CartScreenReducer,
                CartScreenIntent::Failed { message }
            );
        }
    }

    // ========================================================================
    // Backend results
    // ========================================================================

    pub fn on_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::News { generation, result } => {
                dispatch_mvi!(
                    self,
                    news,
                    NewsReducer,
                    NewsIntent::Fetch(fetch_outcome(generation, result))
                );
            }
            ApiEvent::Profile { generation, result } => {
                dispatch_mvi!(
                    self,
                    profile,
                    ProfileReducer,
                    fetch_outcome(generation, result)
                );
                if self.active == Tab::Game {
                    self.seed_game_from_profile();
                }
            }
            ApiEvent::Referrals { generation, result } => {
                dispatch_mvi!(
                    self,
                    referrals,
                    ReferralsReducer,
                    ReferralsIntent::Fetch(fetch_outcome(generation, result))
                );
            }
            ApiEvent::Shop { generation, result } => {
                dispatch_mvi!(
                    self,
                    shop,
                    ShopReducer,
                    ShopIntent::Fetch(fetch_outcome(generation, result))
                );
            }
            ApiEvent::GameClick(Ok(result)) => {
                dispatch_mvi!(self, game, GameReducer, GameIntent::Succeeded(result));
            }
            ApiEvent::GameClick(Err(message)) => {
                dispatch_mvi!(self, game, GameReducer, GameIntent::Failed { message });
            }
            ApiEvent::Order(Ok(receipt)) => {
                tracing::info!(
                    order_id = receipt.id,
                    status = %receipt.status,
                    total_bonus = receipt.total_bonus,
                    "Order placed"
                );
                self.cart.clear();
                dispatch_mvi!(
                    self,
                    cart_screen,
                    CartScreenReducer,
                    CartScreenIntent::Succeeded
                );
                self.show_notice(format!("Order #{} placed", receipt.id), NoticeLevel::Info);
                if self.active == Tab::Cart {
                    self.select_tab(Tab::Shop);
                }
            }
            ApiEvent::Order(Err(message)) => {
                dispatch_mvi!(
                    self,
                    cart_screen,
                    CartScreenReducer,
                    CartScreenIntent::Failed { message }
                );
            }
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn fetch_news(&mut self) {
        let generation = self.bump_generation();
        dispatch_mvi!(
            self,
            news,
            NewsReducer,
            NewsIntent::Fetch(FetchIntent::Start { generation })
        );
        if let Err(message) = self.send_command(ApiCommand::FetchNews { generation }) {
            dispatch_mvi!(
                self,
                news,
                NewsReducer,
                NewsIntent::Fetch(FetchIntent::Failed {
                    generation,
                    message
                })
            );
        }
    }

    fn fetch_profile(&mut self) {
        let generation = self.bump_generation();
        dispatch_mvi!(
            self,
            profile,
            ProfileReducer,
            ProfileIntent::Start { generation }
        );
        if let Err(message) = self.send_command(ApiCommand::FetchProfile { generation }) {
            dispatch_mvi!(
                self,
                profile,
                ProfileReducer,
                ProfileIntent::Failed {
                    generation,
                    message
                }
            );
        }
    }

    fn fetch_referrals(&mut self) {
        let generation = self.bump_generation();
        dispatch_mvi!(
            self,
            referrals,
            ReferralsReducer,
            ReferralsIntent::Fetch(FetchIntent::Start { generation })
        );
        if let Err(message) = self.send_command(ApiCommand::FetchReferrals { generation }) {
            dispatch_mvi!(
                self,
                referrals,
                ReferralsReducer,
                ReferralsIntent::Fetch(FetchIntent::Failed {
                    generation,
                    message
                })
            );
        }
    }

    fn fetch_shop(&mut self) {
        let generation = self.bump_generation();
        dispatch_mvi!(
            self,
            shop,
            ShopReducer,
            ShopIntent::Fetch(FetchIntent::Start { generation })
        );
        if let Err(message) = self.send_command(ApiCommand::FetchShop { generation }) {
            dispatch_mvi!(
                self,
                shop,
                ShopReducer,
                ShopIntent::Fetch(FetchIntent::Failed {
                    generation,
                    message
                })
            );
        }
    }

    fn seed_game_from_profile(&mut self) {
        let Some(profile) = self.profile.data() else {
            return;
        };
        let stats = GameStats {
            bonus_balance: profile.bonus_balance,
            game_progress: profile.game_progress,
        };
        dispatch_mvi!(self, game, GameReducer, GameIntent::Seed(stats));
    }

    fn adjust_selected_line(&mut self, delta: i64) {
        if self.reject_cart_change() {
            return;
        }
        if let Some(line) = self.cart.lines().get(self.cart_screen.selected) {
            let id = line.item().id;
            let quantity = i64::from(line.quantity()) + delta;
            self.cart.set_quantity(id, quantity);
            self.clamp_cart_selection();
        }
    }

    /// The cart is frozen while an order for it is in flight.
    fn reject_cart_change(&mut self) -> bool {
        if !self.cart_screen.pending {
            return false;
        }
        self.show_notice(
            "Order in progress; cart is locked".to_string(),
            NoticeLevel::Error,
        );
        true
    }

    fn clamp_cart_selection(&mut self) {
        let lines = self.cart.len();
        dispatch_mvi!(
            self,
            cart_screen,
            CartScreenReducer,
            CartScreenIntent::Clamp { lines }
        );
    }

    fn bump_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    fn show_notice(&mut self, text: String, level: NoticeLevel) {
        self.notice = Some(Notice {
            text,
            level,
            shown_at: Instant::now(),
        });
    }

    fn send_command(&mut self, command: ApiCommand) -> Result<(), String> {
        let Some(sender) = &self.command_sender else {
            return Err("Request queue unavailable".to_string());
        };

        sender.try_send(command).map_err(|err| {
            tracing::warn!(error = %err, "Request queue send failed");
            let message = "Request queue unavailable".to_string();
            self.show_notice(message.clone(), NoticeLevel::Error);
            message
        })
    }
}

fn fetch_outcome<T>(generation: u64, result: Result<T, String>) -> FetchIntent<T> {
    match result {
        Ok(data) => FetchIntent::Loaded { generation, data },
        Err(message) => FetchIntent::Failed {
            generation,
            message,
        },
    }
}
