//! Session controller: login gate, name prompt and the menu loop.
//!
//! Generic over the console so the binary can drive it from stdin/stdout and
//! tests from in-memory buffers. All hotel state lives in the one owned
//! [`Hotel`].

use anyhow::{Result, bail};
use hotel_core::{Hotel, HotelError, RoomNo};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::auth::Authenticator;

const MENU: &str = "\
Please choose one of the following options
1. Create a room
2. Remove a room
3. Get details of all rooms
4. Get details of available rooms
5. Book a room
6. Unbook a room
7. Get details of booked rooms
8. Change the price of a room
9. Exit";

const NO_ROOMS: &str = "There is no room.";
const NO_AVAILABLE_ROOMS: &str = "There are no available rooms.";
const NO_BOOKED_ROOMS: &str = "There are no booked rooms.";
const WRONG_INPUT: &str = "Wrong input!";

/// What the menu loop does after an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W> {
    hotel: Hotel,
    authenticator: Box<dyn Authenticator>,
    max_login_attempts: Option<u32>,
    input: R,
    output: W,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(hotel: Hotel, authenticator: Box<dyn Authenticator>, input: R, output: W) -> Self {
        Self {
            hotel,
            authenticator,
            max_login_attempts: None,
            input,
            output,
        }
    }

    pub fn with_max_login_attempts(mut self, max_login_attempts: Option<u32>) -> Self {
        self.max_login_attempts = max_login_attempts;
        self
    }

    pub fn into_parts(self) -> (Hotel, W) {
        (self.hotel, self.output)
    }

    /// Runs until the operator exits or input ends.
    pub async fn run(&mut self) -> Result<()> {
        if !self.login().await? {
            return Ok(());
        }

        if !self.hotel.has_name() {
            self.say("Please name your hotel:").await?;
            let Some(name) = self.read_line().await? else {
                return Ok(());
            };
            self.hotel.set_name(name);
        }

        loop {
            let header = format!("{} Hotel Management program", self.hotel.name());
            self.say(&header).await?;
            self.say(MENU).await?;
            let Some(option) = self.ask("Chosen option: ").await? else {
                return Ok(());
            };
            if self.choose(option.trim()).await? == Flow::Exit {
                let occupancy = serde_json::to_string(&self.hotel.occupancy())?;
                log::info!("session ended, occupancy {occupancy}");
                return Ok(());
            }
        }
    }

    /// `Ok(false)` when input ends before a successful login.
    async fn login(&mut self) -> Result<bool> {
        if !self.authenticator.is_enabled() {
            log::warn!("no operator credentials configured; login gate disabled");
            return Ok(true);
        }

        let mut failures = 0u32;
        loop {
            let Some(username) = self.ask("Username: ").await? else {
                return Ok(false);
            };
            let Some(password) = self.ask("Password: ").await? else {
                return Ok(false);
            };

            if self.authenticator.verify(&username, &password) {
                log::info!("operator {username} logged in");
                return Ok(true);
            }

            failures += 1;
            log::warn!("failed login attempt {failures} for {username:?}");
            self.say("Wrong username or password!").await?;
            if let Some(max) = self.max_login_attempts
                && failures >= max
            {
                bail!("too many failed login attempts ({failures})");
            }
        }
    }

    async fn choose(&mut self, option: &str) -> Result<Flow> {
        match option {
            "1" => self.create_room().await,
            "2" => self.remove_room().await,
            "3" => {
                let details = self.hotel.all_rooms_details();
                self.show(details, NO_ROOMS).await?;
                Ok(Flow::Continue)
            }
            "4" => {
                let details = self.hotel.empty_room_details();
                self.show(details, NO_AVAILABLE_ROOMS).await?;
                Ok(Flow::Continue)
            }
            "5" => self.book_room().await,
            "6" => self.unbook_room().await,
            "7" => {
                let details = self.hotel.booked_room_details();
                self.show(details, NO_BOOKED_ROOMS).await?;
                Ok(Flow::Continue)
            }
            "8" => self.reprice_room().await,
            "9" => Ok(Flow::Exit),
            _ => {
                self.say(WRONG_INPUT).await?;
                Ok(Flow::Continue)
            }
        }
    }

    async fn create_room(&mut self) -> Result<Flow> {
        let Some(price) = self.ask_price("Please input the price: ").await? else {
            return Ok(Flow::Exit);
        };
        let Some(beach_side) = self.ask_yes_no("Does it have beach view? (Y/N): ").await? else {
            return Ok(Flow::Exit);
        };
        let Some(vip) = self.ask_yes_no("Is it VIP? (Y/N): ").await? else {
            return Ok(Flow::Exit);
        };

        match self.hotel.add_room(price, beach_side, vip) {
            Ok(room_no) => self.say(&format!("Room {room_no} created.")).await?,
            Err(e) => self.say(&operator_message(&e)).await?,
        }
        Ok(Flow::Continue)
    }

    async fn remove_room(&mut self) -> Result<Flow> {
        let details = self.hotel.all_rooms_details();
        if !self.show(details, NO_ROOMS).await? {
            return Ok(Flow::Continue);
        }
        let Some(room_no) = self.ask_room_no("Enter the room number to remove: ").await? else {
            return Ok(Flow::Exit);
        };

        match self.hotel.remove_room(room_no) {
            Ok(_) => self.say("Deleted successfully").await?,
            Err(e) => self.say(&operator_message(&e)).await?,
        }
        Ok(Flow::Continue)
    }

    /// Lists every room, booked ones included: re-booking replaces the guest.
    async fn book_room(&mut self) -> Result<Flow> {
        let details = self.hotel.all_rooms_details();
        if !self.show(details, NO_ROOMS).await? {
            return Ok(Flow::Continue);
        }
        let Some(room_no) = self.ask_room_no("Please choose the room you want to book: ").await? else {
            return Ok(Flow::Exit);
        };
        let Some(guest) = self.ask("Please provide the guest name: ").await? else {
            return Ok(Flow::Exit);
        };

        match self.hotel.book_room(room_no, guest.trim()) {
            Ok(()) => self.say(&format!("Room {room_no} booked.")).await?,
            Err(e) => self.say(&operator_message(&e)).await?,
        }
        Ok(Flow::Continue)
    }

    async fn unbook_room(&mut self) -> Result<Flow> {
        let details = self.hotel.booked_room_details();
        if !self.show(details, NO_BOOKED_ROOMS).await? {
            return Ok(Flow::Continue);
        }
        let Some(room_no) = self.ask_room_no("Choose a room to unbook: ").await? else {
            return Ok(Flow::Exit);
        };

        match self.hotel.unbook_room(room_no) {
            Ok(()) => self.say(&format!("Room {room_no} unbooked.")).await?,
            Err(e) => self.say(&operator_message(&e)).await?,
        }
        Ok(Flow::Continue)
    }

    async fn reprice_room(&mut self) -> Result<Flow> {
        let details = self.hotel.all_rooms_details();
        if !self.show(details, NO_ROOMS).await? {
            return Ok(Flow::Continue);
        }
        let Some(room_no) = self.ask_room_no("Choose a room to reprice: ").await? else {
            return Ok(Flow::Exit);
        };
        let Some(price) = self.ask_price("Please input the new base price: ").await? else {
            return Ok(Flow::Exit);
        };

        match self.hotel.reprice_room(room_no, price) {
            Ok(()) => self.say(&format!("Room {room_no} repriced.")).await?,
            Err(e) => self.say(&operator_message(&e)).await?,
        }
        Ok(Flow::Continue)
    }

    /// Prints `details`, or `when_empty` if there are none. Returns whether
    /// anything was listed.
    async fn show(&mut self, details: String, when_empty: &str) -> Result<bool> {
        if details.is_empty() {
            self.say(when_empty).await?;
            return Ok(false);
        }
        self.say(&details).await?;
        Ok(true)
    }

    /// Re-prompts until the answer parses; `None` on end of input.
    async fn ask_parsed<T: std::str::FromStr>(&mut self, prompt: &str) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt).await? else {
                return Ok(None);
            };
            match answer.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say(WRONG_INPUT).await?,
            }
        }
    }

    async fn ask_price(&mut self, prompt: &str) -> Result<Option<f64>> {
        self.ask_parsed(prompt).await
    }

    async fn ask_room_no(&mut self, prompt: &str) -> Result<Option<RoomNo>> {
        self.ask_parsed(prompt).await
    }

    /// Anything but `y`/`Y` counts as no.
    async fn ask_yes_no(&mut self, prompt: &str) -> Result<Option<bool>> {
        let answer = self.ask(prompt).await?;
        Ok(answer.map(|a| a.trim().eq_ignore_ascii_case("y")))
    }

    async fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.output.write_all(prompt.as_bytes()).await?;
        self.output.flush().await?;
        self.read_line().await
    }

    async fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            log::debug!("input closed");
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    async fn say(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }
}

/// Lookup and state failures keep the console's fixed wording; validation
/// failures show the rejected value.
fn operator_message(error: &HotelError) -> String {
    match error {
        HotelError::RoomNotFound(_) => "Room not found!".to_string(),
        HotelError::NotBooked(_) => "The room is not booked".to_string(),
        HotelError::InvalidPrice(_) | HotelError::InvalidRoomNumber(_) => {
            capitalize(&error.to_string())
        }
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
