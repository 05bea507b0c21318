/// An uploaded audio blob, already read out of the multipart stream.
#[derive(Debug, Clone)]
pub struct UploadedAudio {
    pub data: Vec<u8>,
    pub filename: Option<String>,
}

/// One incoming transcription request. At most one of the three audio
/// sources is acted on, in the precedence order of [`Self::source`].
#[derive(Debug, Clone, Default)]
pub struct TranscribeRequest {
    pub upload: Option<UploadedAudio>,
    pub audio_url: Option<String>,
    pub audio_base64: Option<String>,
}

/// The audio source selected for a request: upload wins over a remote
/// URL, which wins over an inline base64 payload.
#[derive(Debug, Clone)]
pub enum AudioSource<'a> {
    Upload(&'a UploadedAudio),
    RemoteUrl(&'a str),
    InlineBase64(&'a str),
}

impl TranscribeRequest {
    pub fn source(&self) -> Option<AudioSource<'_>> {
        if let Some(upload) = &self.upload {
            Some(AudioSource::Upload(upload))
        } else if let Some(url) = &self.audio_url {
            Some(AudioSource::RemoteUrl(url))
        } else {
            self.audio_base64
                .as_deref()
                .map(AudioSource::InlineBase64)
        }
    }
}
