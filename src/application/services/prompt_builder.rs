use crate::domain::Playbook;

/// Prompt for the audio flow: the model listens to the attached recording.
pub fn build_audio_prompt(playbook: &Playbook) -> String {
    format!(
        "\
Você é um coach de vendas de alta performance. Seu objetivo é analisar o ÁUDIO de uma ligação e fornecer feedback baseado no playbook abaixo.

--- PLAYBOOK ---
{}
--- FIM DO PLAYBOOK ---

**TAREFA:**
Ouça o áudio, transcreva-o mentalmente e analise a transcrição. Sua resposta DEVE ser em formato Markdown com as seções \"✅ PONTOS POSITIVOS\" e \"💡 PONTOS CONSTRUTIVOS\".",
        playbook.text()
    )
}

/// Prompt for the text flow: the caller-supplied transcript is appended
/// after a blank line.
pub fn build_text_prompt(playbook: &Playbook, transcript: &str) -> String {
    format!(
        "\
Você é um coach de vendas de alta performance. Seu objetivo é analisar a TRANSCRIÇÃO de uma ligação e fornecer feedback baseado no playbook abaixo.

--- PLAYBOOK ---
{}
--- FIM DO PLAYBOOK ---

**TAREFA:**
Analise a transcrição fornecida. Sua resposta DEVE ser em formato Markdown com as seções \"✅ PONTOS POSITIVOS\" e \"💡 PONTOS CONSTRUTIVOS\".

A transcrição é a seguinte:

{}",
        playbook.text(),
        transcript
    )
}
