#![no_std]
#![no_main]

use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::{
    Clock, I2C, Sio, Timer,
    adc::{Adc, AdcPin},
    clocks::init_clocks_and_plls,
    gpio::{FunctionI2C, Pin, PullUp},
    pac::{self, interrupt},
    watchdog::Watchdog,
};
use rtt_target::{rprintln, rtt_init_print};
use ssd1306::I2CDisplayInterface;

use rp_pico_joystick::board::{Buttons, DISPLAY, I2C_FREQUENCY, LEDS, PicoBoard, STATUS_LED};
use rp_pico_joystick::joystick::JoystickAdc;
use rp_pico_joystick::leds::PwmLeds;
use rp_pico_joystick::oled::{OLED_ADDRESS, Oled};
use rp_pico_joystick::time::{HardwareTimer, Instant};

use joystick_reactor::{
    EdgeTrigger, InterruptDispatcher, Reactor, ReactorConfig, Shared, TimeSource, apply_all,
};

/// Everything the GPIO interrupt owns
struct IrqContext {
    buttons: Buttons,
    clock: HardwareTimer,
    dispatcher: InterruptDispatcher<Instant>,
}

static IRQ: Shared<IrqContext> = Shared::new();

/// GPIO bank interrupt - one entry point for all three buttons
#[interrupt]
fn IO_IRQ_BANK0() {
    IRQ.with(|ctx| {
        let now = ctx.clock.now();
        for source in ctx.buttons.take_pending() {
            let commands = ctx.dispatcher.handle(source, EdgeTrigger::Falling, now);
            apply_all(&mut PicoBoard, &commands);
        }
    });
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== RP Pico Joystick Reactor ===");
    rprintln!("Starting initialization...");

    // Get peripherals
    let mut pac = pac::Peripherals::take().unwrap();

    // Set up watchdog driver
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    rprintln!(
        "System clock configured: {} Hz",
        clocks.system_clock.freq().to_Hz()
    );

    // Set up the Single Cycle IO (for GPIO access)
    let sio = Sio::new(pac.SIO);

    // Set the pins to their default state
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    // Status LED on GPIO11
    STATUS_LED.install(pins.gpio11.into_push_pull_output());

    // PWM slice 6 drives blue (GPIO12, A) and red (GPIO13, B)
    let pwm_slices = rp_pico::hal::pwm::Slices::new(pac.PWM, &mut pac.RESETS);
    let mut led_slice = pwm_slices.pwm6;
    led_slice.channel_a.output_to(pins.gpio12);
    led_slice.channel_b.output_to(pins.gpio13);
    LEDS.install(PwmLeds::new(led_slice));
    rprintln!("LED PWM configured on GPIO12 (blue), GPIO13 (red)");

    // OLED on I2C1
    let sda: Pin<_, FunctionI2C, PullUp> = pins.gpio14.reconfigure();
    let scl: Pin<_, FunctionI2C, PullUp> = pins.gpio15.reconfigure();
    let i2c = I2C::i2c1(
        pac.I2C1,
        sda,
        scl,
        I2C_FREQUENCY,
        &mut pac.RESETS,
        clocks.system_clock.freq(),
    );
    let oled = Oled::new(I2CDisplayInterface::new_custom_address(i2c, OLED_ADDRESS))
        .ok()
        .unwrap();
    DISPLAY.install(oled);
    rprintln!("OLED configured on I2C1 (GPIO14, GPIO15)");

    // Joystick axes on ADC0 (GPIO26) and ADC1 (GPIO27)
    let adc = Adc::new(pac.ADC, &mut pac.RESETS);
    let horizontal = AdcPin::new(pins.gpio27.into_floating_input()).unwrap();
    let vertical = AdcPin::new(pins.gpio26.into_floating_input()).unwrap();
    let mut joystick = JoystickAdc::new(adc, horizontal, vertical);

    let reactor = Reactor::<Instant>::new(ReactorConfig::default());
    reactor.startup(&mut PicoBoard);
    let (dispatcher, sampler) = reactor.into_parts();

    // Buttons: A (GPIO5), joystick (GPIO22), B (GPIO6), active low
    let buttons = Buttons::new(
        pins.gpio5.into_pull_up_input(),
        pins.gpio22.into_pull_up_input(),
        pins.gpio6.into_pull_up_input(),
    );
    IRQ.install(IrqContext {
        buttons,
        clock: HardwareTimer::new(timer),
        dispatcher,
    });

    // Safety: every resource the handler touches is installed above.
    unsafe {
        pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0);
    }

    rprintln!("=== Hardware Ready ===");

    let mut delay = timer;
    sampler.run(&mut joystick, &mut PicoBoard, &mut delay)
}
