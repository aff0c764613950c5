//! # Protobuf Codec
//!
//! This module implements `tonic::codec::Codec` for the crate's message types,
//! bridging typed `prost` messages and the raw gRPC byte stream.
//!
//! It acts as a bridge:
//! - **Encoding (Request):** Serializes a message into the generic gRPC byte buffer.
//!   Fields at their zero value are omitted entirely.
//! - **Decoding (Response):** Starts from an all-defaults message and merges the
//!   received bytes into it, skipping unknown fields by their wire-type.
//!
//! The codec is generic over the request/response pair, so a single implementation
//! serves every method of the service. Which pair to use is decided at compile time
//! by the caller (see [`crate::descriptor`]).
use prost::Message;
use std::marker::PhantomData;
use tonic::{
    Status,
    codec::{Codec, DecodeBuf, Decoder, EncodeBuf, Encoder},
};

/// A `tonic` codec for a pair of `prost` messages.
///
/// `E` is the message type sent on the wire, `D` the message type received.
pub struct ProtoCodec<E, D> {
    _marker: PhantomData<(E, D)>,
}

impl<E, D> Default for ProtoCodec<E, D> {
    fn default() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<E, D> Codec for ProtoCodec<E, D>
where
    E: Message + 'static,
    D: Message + Default + 'static,
{
    type Encode = E;
    type Decode = D;

    type Encoder = ProtoEncoder<E>;
    type Decoder = ProtoDecoder<D>;

    fn encoder(&mut self) -> Self::Encoder {
        ProtoEncoder(PhantomData)
    }

    fn decoder(&mut self) -> Self::Decoder {
        ProtoDecoder(PhantomData)
    }
}

/// Responsible for encoding a message into Protobuf bytes.
pub struct ProtoEncoder<E>(PhantomData<E>);

impl<E: Message> Encoder for ProtoEncoder<E> {
    type Item = E;
    type Error = Status;

    fn encode(&mut self, item: Self::Item, dst: &mut EncodeBuf<'_>) -> Result<(), Self::Error> {
        // The length prefix of the gRPC frame is written by tonic; only the raw
        // tag/value sequence goes through here.
        item.encode_raw(dst);
        Ok(())
    }
}

/// Responsible for decoding Protobuf bytes into a message.
pub struct ProtoDecoder<D>(PhantomData<D>);

impl<D: Message + Default> Decoder for ProtoDecoder<D> {
    type Item = D;
    type Error = Status;

    fn decode(&mut self, src: &mut DecodeBuf<'_>) -> Result<Option<Self::Item>, Self::Error> {
        let mut message = D::default();
        message
            .merge(src)
            .map_err(|e| Status::internal(format!("Failed to decode Protobuf bytes: {}", e)))?;

        Ok(Some(message))
    }
}
