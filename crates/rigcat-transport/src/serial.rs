//! Serial port transport for rig communication.
//!
//! This module provides [`SerialTransport`], which implements the
//! [`Transport`] trait for USB virtual COM ports and physical RS-232 serial
//! connections.
//!
//! Most transceivers connect via USB and present as virtual serial ports:
//! - Yaesu FT-991: CAT protocol, typically 4800-38400 baud
//! - Yaesu FT-817: binary CAT, fixed at 4800/9600 baud
//!
//! # Example
//!
//! ```no_run
//! use rigcat_transport::SerialTransport;
//! use rigcat_core::transport::Transport;
//! use std::time::Duration;
//!
//! # async fn example() -> rigcat_core::Result<()> {
//! // Open a CAT connection at 38400 baud
//! let mut transport = SerialTransport::open("/dev/ttyUSB0", 38400).await?;
//!
//! // Send a CAT command
//! transport.send(b"FA;").await?;
//!
//! // Receive response with 1 second timeout
//! let mut buf = [0u8; 256];
//! let n = transport.receive(&mut buf, Duration::from_secs(1)).await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use rigcat_core::error::{Error, Result};
use rigcat_core::transport::Transport;
use rigcat_core::types::ControlLine;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_serial::{SerialPort, SerialPortBuilderExt, SerialStream};

/// Serial port configuration.
///
/// Defaults are appropriate for most CAT-controlled transceivers:
/// - 8 data bits
/// - 1 stop bit
/// - No parity
/// - No flow control
///
/// The full closed value sets are representable, but not every combination
/// is expressible on every platform; an unsupported setting fails when the
/// port is opened, never silently downgrades.
#[derive(Debug, Clone)]
pub struct SerialConfig {
    /// Baud rate (e.g., 4800, 9600, 38400)
    pub baud_rate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Number of stop bits (typically 1)
    pub stop_bits: StopBits,
    /// Parity checking (typically None)
    pub parity: Parity,
    /// Flow control (typically None for CAT)
    pub flow_control: FlowControl,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baud_rate: 9600,
            data_bits: DataBits::Eight,
            stop_bits: StopBits::One,
            parity: Parity::None,
            flow_control: FlowControl::None,
        }
    }
}

/// Number of data bits per character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataBits {
    Five,
    Six,
    Seven,
    Eight,
}

impl From<DataBits> for tokio_serial::DataBits {
    fn from(bits: DataBits) -> Self {
        match bits {
            DataBits::Five => tokio_serial::DataBits::Five,
            DataBits::Six => tokio_serial::DataBits::Six,
            DataBits::Seven => tokio_serial::DataBits::Seven,
            DataBits::Eight => tokio_serial::DataBits::Eight,
        }
    }
}

/// Number of stop bits per character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopBits {
    One,
    OnePointFive,
    Two,
}

impl TryFrom<StopBits> for tokio_serial::StopBits {
    type Error = Error;

    fn try_from(bits: StopBits) -> Result<Self> {
        match bits {
            StopBits::One => Ok(tokio_serial::StopBits::One),
            StopBits::Two => Ok(tokio_serial::StopBits::Two),
            // Not representable by the serial driver.
            StopBits::OnePointFive => Err(Error::InvalidParameter(
                "1.5 stop bits not supported on this platform".into(),
            )),
        }
    }
}

/// Parity checking mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    None,
    Odd,
    Even,
    Mark,
    Space,
}

impl TryFrom<Parity> for tokio_serial::Parity {
    type Error = Error;

    fn try_from(parity: Parity) -> Result<Self> {
        match parity {
            Parity::None => Ok(tokio_serial::Parity::None),
            Parity::Odd => Ok(tokio_serial::Parity::Odd),
            Parity::Even => Ok(tokio_serial::Parity::Even),
            Parity::Mark | Parity::Space => Err(Error::InvalidParameter(format!(
                "{parity:?} parity not supported on this platform"
            ))),
        }
    }
}

/// Flow control mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowControl {
    None,
    /// XON/XOFF software flow control.
    XonXoff,
    /// RTS/CTS hardware flow control. Incompatible with RTS-keyed PTT.
    RtsCts,
    /// DSR/DTR hardware flow control. Incompatible with DTR-keyed PTT.
    DsrDtr,
}

impl TryFrom<FlowControl> for tokio_serial::FlowControl {
    type Error = Error;

    fn try_from(flow: FlowControl) -> Result<Self> {
        match flow {
            FlowControl::None => Ok(tokio_serial::FlowControl::None),
            FlowControl::XonXoff => Ok(tokio_serial::FlowControl::Software),
            FlowControl::RtsCts => Ok(tokio_serial::FlowControl::Hardware),
            FlowControl::DsrDtr => Err(Error::InvalidParameter(
                "DSR/DTR flow control not supported on this platform".into(),
            )),
        }
    }
}

/// Serial port transport for rig communication.
///
/// Implements the [`Transport`] trait for USB virtual COM ports and
/// physical RS-232 connections to transceivers, including the DTR/RTS
/// control-line access used for out-of-band PTT keying.
pub struct SerialTransport {
    /// The underlying serial port stream
    port: Option<SerialStream>,
    /// Port name for logging/debugging
    port_name: String,
}

impl SerialTransport {
    /// Open a serial port with the given baud rate and default settings.
    ///
    /// Default settings:
    /// - 8 data bits
    /// - 1 stop bit
    /// - No parity
    /// - No flow control
    ///
    /// # Arguments
    ///
    /// * `port` - Serial port path (e.g., "/dev/ttyUSB0" on Linux, "COM3" on Windows)
    /// * `baud_rate` - Baud rate (e.g., 4800, 9600, 38400)
    pub async fn open(port: &str, baud_rate: u32) -> Result<Self> {
        let config = SerialConfig {
            baud_rate,
            ..Default::default()
        };
        Self::open_with_config(port, config).await
    }

    /// Open a serial port with full configuration control.
    ///
    /// Fails with an invalid-parameter error before touching the port if
    /// the configuration cannot be expressed on this platform.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use rigcat_transport::{SerialTransport, SerialConfig, DataBits, StopBits, Parity, FlowControl};
    /// # async fn example() -> rigcat_core::Result<()> {
    /// let config = SerialConfig {
    ///     baud_rate: 38400,
    ///     data_bits: DataBits::Eight,
    ///     stop_bits: StopBits::One,
    ///     parity: Parity::None,
    ///     flow_control: FlowControl::None,
    /// };
    /// let transport = SerialTransport::open_with_config("/dev/ttyUSB0", config).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn open_with_config(port: &str, config: SerialConfig) -> Result<Self> {
        tracing::debug!(
            port = %port,
            baud_rate = config.baud_rate,
            data_bits = ?config.data_bits,
            stop_bits = ?config.stop_bits,
            parity = ?config.parity,
            flow_control = ?config.flow_control,
            "Opening serial port"
        );

        // Reject inexpressible settings before the port is touched.
        let stop_bits: tokio_serial::StopBits = config.stop_bits.try_into()?;
        let parity: tokio_serial::Parity = config.parity.try_into()?;
        let flow_control: tokio_serial::FlowControl = config.flow_control.try_into()?;

        let mut serial_stream = tokio_serial::new(port, config.baud_rate)
            .data_bits(config.data_bits.into())
            .stop_bits(stop_bits)
            .parity(parity)
            .flow_control(flow_control)
            .open_native_async()
            .map_err(|e| {
                tracing::error!(port = %port, error = %e, "Failed to open serial port");
                Error::Transport(format!("Failed to open serial port {}: {}", port, e))
            })?;

        // De-assert DTR and RTS immediately after opening.
        //
        // Many transceivers route DTR/RTS to CW key and/or PTT inputs.
        // If the OS asserts DTR on open (common default), the radio will
        // interpret it as key-down and start transmitting. Hamlib, flrig,
        // and wsjt-x all do this same de-assertion.
        if let Err(e) = serial_stream.write_data_terminal_ready(false) {
            tracing::warn!(port = %port, error = %e, "Failed to de-assert DTR");
        }
        if let Err(e) = serial_stream.write_request_to_send(false) {
            tracing::warn!(port = %port, error = %e, "Failed to de-assert RTS");
        }

        tracing::info!(port = %port, baud_rate = config.baud_rate, "Serial port opened successfully");

        Ok(Self {
            port: Some(serial_stream),
            port_name: port.to_string(),
        })
    }

    /// Get the name of the serial port.
    pub fn port_name(&self) -> &str {
        &self.port_name
    }
}

#[async_trait]
impl Transport for SerialTransport {
    async fn send(&mut self, data: &[u8]) -> Result<()> {
        let port = self.port.as_mut().ok_or(Error::NotConnected)?;

        tracing::trace!(
            port = %self.port_name,
            bytes = data.len(),
            data = ?data,
            "Sending data"
        );

        port.write_all(data).await.map_err(|e| {
            tracing::error!(
                port = %self.port_name,
                error = %e,
                "Failed to send data"
            );
            if e.kind() == std::io::ErrorKind::BrokenPipe
                || e.kind() == std::io::ErrorKind::NotConnected
            {
                Error::ConnectionLost
            } else {
                Error::Io(e)
            }
        })?;

        // Flush to ensure data is transmitted immediately
        port.flush().await.map_err(|e| {
            tracing::error!(
                port = %self.port_name,
                error = %e,
                "Failed to flush serial port"
            );
            Error::Io(e)
        })?;

        Ok(())
    }

    async fn receive(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize> {
        let port = self.port.as_mut().ok_or(Error::NotConnected)?;

        let result = tokio::time::timeout(timeout, port.read(buf)).await;

        match result {
            Ok(Ok(n)) => {
                tracing::trace!(
                    port = %self.port_name,
                    bytes = n,
                    data = ?&buf[..n],
                    "Received data"
                );
                Ok(n)
            }
            Ok(Err(e)) => {
                tracing::error!(
                    port = %self.port_name,
                    error = %e,
                    "Failed to receive data"
                );
                if e.kind() == std::io::ErrorKind::BrokenPipe
                    || e.kind() == std::io::ErrorKind::NotConnected
                {
                    Err(Error::ConnectionLost)
                } else {
                    Err(Error::Io(e))
                }
            }
            Err(_) => {
                tracing::trace!(
                    port = %self.port_name,
                    timeout_ms = timeout.as_millis(),
                    "Timeout waiting for data"
                );
                Err(Error::Timeout)
            }
        }
    }

    async fn set_control_line(&mut self, line: ControlLine, asserted: bool) -> Result<()> {
        let port = self.port.as_mut().ok_or(Error::NotConnected)?;

        tracing::debug!(
            port = %self.port_name,
            line = %line,
            asserted = asserted,
            "Setting control line"
        );

        let result = match line {
            ControlLine::Dtr => port.write_data_terminal_ready(asserted),
            ControlLine::Rts => port.write_request_to_send(asserted),
        };
        result.map_err(|e| {
            tracing::error!(
                port = %self.port_name,
                line = %line,
                error = %e,
                "Failed to set control line"
            );
            Error::Transport(format!("failed to set {line}: {e}"))
        })
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(mut port) = self.port.take() {
            tracing::debug!(port = %self.port_name, "Closing serial port");

            // Flush any pending data before closing
            if let Err(e) = port.flush().await {
                tracing::warn!(
                    port = %self.port_name,
                    error = %e,
                    "Failed to flush before closing (continuing anyway)"
                );
            }

            // The port is dropped here, which closes it
            tracing::info!(port = %self.port_name, "Serial port closed");
        }

        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.port.is_some()
    }
}

// Implement Drop to ensure the port is closed properly
impl Drop for SerialTransport {
    fn drop(&mut self) {
        if self.port.is_some() {
            tracing::debug!(port = %self.port_name, "SerialTransport dropped, closing port");
            // The port will be automatically closed when dropped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_config_default() {
        let config = SerialConfig::default();
        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.data_bits, DataBits::Eight);
        assert_eq!(config.stop_bits, StopBits::One);
        assert_eq!(config.parity, Parity::None);
        assert_eq!(config.flow_control, FlowControl::None);
    }

    #[test]
    fn data_bits_conversion() {
        let _: tokio_serial::DataBits = DataBits::Five.into();
        let _: tokio_serial::DataBits = DataBits::Six.into();
        let _: tokio_serial::DataBits = DataBits::Seven.into();
        let _: tokio_serial::DataBits = DataBits::Eight.into();
    }

    #[test]
    fn stop_bits_conversion() {
        assert!(tokio_serial::StopBits::try_from(StopBits::One).is_ok());
        assert!(tokio_serial::StopBits::try_from(StopBits::Two).is_ok());
        assert!(matches!(
            tokio_serial::StopBits::try_from(StopBits::OnePointFive),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn parity_conversion() {
        assert!(tokio_serial::Parity::try_from(Parity::None).is_ok());
        assert!(tokio_serial::Parity::try_from(Parity::Odd).is_ok());
        assert!(tokio_serial::Parity::try_from(Parity::Even).is_ok());
        assert!(tokio_serial::Parity::try_from(Parity::Mark).is_err());
        assert!(tokio_serial::Parity::try_from(Parity::Space).is_err());
    }

    #[test]
    fn flow_control_conversion() {
        assert!(tokio_serial::FlowControl::try_from(FlowControl::None).is_ok());
        assert!(tokio_serial::FlowControl::try_from(FlowControl::XonXoff).is_ok());
        assert!(tokio_serial::FlowControl::try_from(FlowControl::RtsCts).is_ok());
        assert!(tokio_serial::FlowControl::try_from(FlowControl::DsrDtr).is_err());
    }
}
