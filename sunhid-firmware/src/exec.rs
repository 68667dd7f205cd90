//! The converter's tasks: reading the keyboard and mouse serial lines, answering the host's LED
//! reports and writing HID reports.

use core::future::pending;

use embassy_futures::select::{select, select3, Either, Either3};
use embassy_sync::blocking_mutex::raw::{NoopRawMutex, RawMutex};
use embassy_usb::driver::EndpointIn;
use embedded_hal_async::delay::DelayNs;
use embedded_io_async::{Error, ErrorKind, Read, Write};
use sunhid_common::sun_protocol::{led, leds_from_usb};

use crate::{
    config::Config,
    converter::KeyboardConverter,
    hid::{HidWriter, LedSignal},
    info,
    key_reporter::Reporter,
    pointer::PointerFrameDecoder,
    sink::{HostChannel, ReportSink},
    sun_keyboard::{Command, SunKeyboard},
    sun_to_usb::SUN_TO_USB,
    warn,
};

// How many host events can be queued before the converters start dropping them
pub const HOST_CHANNEL_SIZE: usize = 32;

const READ_BUFFER_SIZE: usize = 16;
const BELL_MS: u32 = 100;
const GREETING_MS: u32 = 400;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunError {
    Keyboard(ErrorKind),
}

pub async fn send_command<W: Write>(tx: &mut W, command: Command) -> Result<(), W::Error> {
    crate::debug!("keyboard command {:?}", command);
    tx.write_all(&command.to_bytes()).await
}

/// Light all LEDs and ring the bell.
pub async fn greeting<W: Write, D: DelayNs>(tx: &mut W, delay: &mut D) -> Result<(), W::Error> {
    send_command(tx, Command::Leds(led::ALL)).await?;
    send_command(tx, Command::Bell(true)).await?;
    delay.delay_ms(BELL_MS).await;
    send_command(tx, Command::Bell(false)).await?;
    delay.delay_ms(GREETING_MS).await;
    send_command(tx, Command::Leds(0)).await
}

/// Resets the keyboard, greets the user and turns on key click if configured, then settles the
/// layout: a forced layout is applied now, otherwise the keyboard is asked for its own.
pub async fn startup<W: Write, D: DelayNs>(
    tx: &mut W,
    delay: &mut D,
    config: &Config,
    converter: &mut KeyboardConverter<'_>,
) -> Result<(), W::Error> {
    send_command(tx, Command::Reset).await?;
    if config.startup_greeting {
        greeting(tx, delay).await?;
    }
    if config.key_click {
        send_command(tx, Command::Click(true)).await?;
    }
    match config.force_layout {
        Some(layout) => {
            converter.set_layout(layout);
            Ok(())
        }
        None => send_command(tx, Command::RequestLayout).await,
    }
}

/// Feeds the keyboard's byte stream to `converter` until the stream ends.
pub async fn run_keyboard<R: Read>(
    rx: &mut R,
    converter: &mut KeyboardConverter<'_>,
    config: &Config,
    sink: &mut impl ReportSink,
) -> Result<(), R::Error> {
    let mut keyboard = SunKeyboard::new();
    let mut buf = [0; READ_BUFFER_SIZE];
    loop {
        let n = rx.read(&mut buf).await?;
        if n == 0 {
            info!("keyboard stream closed");
            return Ok(());
        }
        for b in &buf[..n] {
            if let Some(event) = keyboard.decode(*b) {
                event.apply(converter, config, sink);
            }
        }
    }
}

/// Feeds the mouse's byte stream to `decoder` until the stream ends.
pub async fn run_mouse<R: Read>(
    rx: &mut R,
    decoder: &mut PointerFrameDecoder,
    sink: &mut impl ReportSink,
) -> Result<(), R::Error> {
    let mut buf = [0; READ_BUFFER_SIZE];
    loop {
        let n = rx.read(&mut buf).await?;
        if n == 0 {
            info!("mouse stream closed");
            return Ok(());
        }
        decoder.update_all(&buf[..n], sink);
    }
}

/// Forwards the host's LED state to the keyboard.
pub async fn run_leds<W: Write, M: RawMutex>(
    tx: &mut W,
    leds: &LedSignal<M>,
) -> Result<(), W::Error> {
    loop {
        let usb = leds.wait().await;
        send_command(tx, Command::Leds(leds_from_usb(usb))).await?;
    }
}

/// Runs the converter until the keyboard stream ends or fails. Queued reports are written before
/// returning.
pub async fn run<KR: Read, KT: Write, MR: Read, D: DelayNs, E: EndpointIn, M: RawMutex>(
    mut keyboard_rx: KR,
    mut keyboard_tx: KT,
    mouse_rx: Option<MR>,
    mut delay: D,
    ep_in: E,
    leds: &LedSignal<M>,
    config: Config,
) -> Result<(), RunError> {
    let channel = HostChannel::<NoopRawMutex, HOST_CHANNEL_SIZE>::default();
    let mut reporter = Reporter::new(HidWriter::new(ep_in));
    let mut converter = KeyboardConverter::new(&SUN_TO_USB, &config);

    let keyboard_fut = async {
        let mut sink = channel.sender();
        startup(&mut keyboard_tx, &mut delay, &config, &mut converter)
            .await
            .map_err(|e| RunError::Keyboard(e.kind()))?;
        match select(
            run_keyboard(&mut keyboard_rx, &mut converter, &config, &mut sink),
            run_leds(&mut keyboard_tx, leds),
        )
        .await
        {
            Either::First(res) => res.map_err(|e| RunError::Keyboard(e.kind())),
            Either::Second(res) => res.map_err(|e| RunError::Keyboard(e.kind())),
        }
    };

    let mouse_fut = async {
        if let (Some(mut rx), true) = (mouse_rx, config.use_mouse) {
            let mut decoder = PointerFrameDecoder::new();
            let mut sink = channel.sender();
            if let Err(e) = run_mouse(&mut rx, &mut decoder, &mut sink).await {
                warn!("mouse stopped: {:?}", e.kind());
            }
        }
        pending::<()>().await
    };

    let result = match select3(reporter.run(&channel), keyboard_fut, mouse_fut).await {
        Either3::First(never) => never,
        Either3::Second(res) => res,
        Either3::Third(()) => Ok(()),
    };

    while let Some(event) = channel.try_receive() {
        reporter.report(event).await;
    }

    result
}

#[cfg(test)]
#[path = "exec_test.rs"]
mod test;
